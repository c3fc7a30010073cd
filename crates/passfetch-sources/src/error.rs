use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving a password source
#[derive(Debug, Error)]
pub enum SourceError {
    /// Malformed or unrecognized source spec
    #[error("invalid password source")]
    InvalidSource,

    /// `stdin` was given an argument
    #[error("'stdin' takes no argument")]
    StdinWithArgument,

    /// `fd:` argument did not parse as a descriptor number
    #[error("invalid file descriptor")]
    InvalidFd,

    /// Environment variable unset or empty
    #[error("environment variable '{var}' not set")]
    EnvNotSet { var: String },

    /// File source could not be opened or read
    #[error("unable to open '{path}': {message}")]
    FileError { path: PathBuf, message: String },

    /// Read from a pre-opened descriptor failed
    #[error("unable to read from file descriptor {fd}: {message}")]
    FdRead { fd: i32, message: String },

    /// External tool failed to spawn or exited non-zero
    #[error("unable to run '{command}': {message}")]
    Subprocess { command: String, message: String },

    /// Controlling terminal could not be opened
    #[error("unable to open terminal: {0}")]
    TtyOpen(String),

    /// Echo mode or the interrupt watcher could not be set up
    #[error("unable to configure terminal: {0}")]
    TtyConfig(String),

    /// Read from the controlling terminal failed
    #[error("unable to read from terminal: {0}")]
    TtyRead(String),
}

impl SourceError {
    /// Create a file error
    pub fn file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FileError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a subprocess error
    pub fn subprocess(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Subprocess {
            command: command.into(),
            message: message.into(),
        }
    }
}
