use std::os::fd::RawFd;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::SourceError;

/// Prompt used by the interactive terminal source when none is given.
pub const DEFAULT_PROMPT: &str = "Password: ";

/// Represents a parsed password source spec.
///
/// A spec is a `scheme:argument` string, split on the first colon:
/// - `cmd:command` - trimmed stdout of a shell command
/// - `env:var` - environment variable
/// - `fd:num` - first line read from an already-open file descriptor
/// - `file:pathname` - first line of a file (`~` and `$VAR` are expanded)
/// - `keychain:name` - macOS keychain lookup via security(1)
/// - `lpass:name` / `lastpass:name` - LastPass CLI
/// - `op:name` / `onepass:name` - 1Password CLI
/// - `pass:password` - the argument itself is the password
/// - `stdin` - alias for `fd:0`, takes no argument
/// - `tty` / `tty:prompt` - prompt on the controlling terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassSource {
    /// `cmd:command` - run via `/bin/sh -c`
    Cmd { command: String },

    /// `env:var`
    Env { var: String },

    /// `fd:num` - descriptor stays owned by the caller
    Fd { fd: RawFd },

    /// `file:pathname`
    File { path: String },

    /// `keychain:name`
    Keychain { entry: String },

    /// `lpass:name` / `lastpass:name`
    Lastpass { entry: String },

    /// `op:name` / `onepass:name`
    Onepassword { entry: String },

    /// `pass:password` - the spec carries the password verbatim
    Pass { value: String },

    /// `stdin`
    Stdin,

    /// `tty:prompt`
    Tty { prompt: String },
}

impl PassSource {
    /// Get the source kind name for logging/errors
    pub fn kind_name(&self) -> &'static str {
        match self {
            PassSource::Cmd { .. } => "cmd",
            PassSource::Env { .. } => "env",
            PassSource::Fd { .. } => "fd",
            PassSource::File { .. } => "file",
            PassSource::Keychain { .. } => "keychain",
            PassSource::Lastpass { .. } => "lpass",
            PassSource::Onepassword { .. } => "op",
            PassSource::Pass { .. } => "pass",
            PassSource::Stdin => "stdin",
            PassSource::Tty { .. } => "tty",
        }
    }
}

impl Default for PassSource {
    /// The default source prompts interactively with [`DEFAULT_PROMPT`].
    fn default() -> Self {
        PassSource::Tty {
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl FromStr for PassSource {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The only colon-free forms, matched against the whole string.
        match s {
            "stdin" => return Ok(PassSource::Stdin),
            "tty" => return Ok(PassSource::default()),
            _ => {}
        }

        let Some((scheme, arg)) = s.split_once(':') else {
            return Err(SourceError::InvalidSource);
        };

        match scheme {
            "cmd" => Ok(PassSource::Cmd {
                command: arg.to_string(),
            }),
            "env" => Ok(PassSource::Env {
                var: arg.to_string(),
            }),
            "fd" => arg
                .parse()
                .map(|fd| PassSource::Fd { fd })
                .map_err(|_| SourceError::InvalidFd),
            "file" => Ok(PassSource::File {
                path: arg.to_string(),
            }),
            "keychain" => Ok(PassSource::Keychain {
                entry: arg.to_string(),
            }),
            "lpass" | "lastpass" => Ok(PassSource::Lastpass {
                entry: arg.to_string(),
            }),
            "op" | "onepass" => Ok(PassSource::Onepassword {
                entry: arg.to_string(),
            }),
            "pass" => Ok(PassSource::Pass {
                value: arg.to_string(),
            }),
            "stdin" => Err(SourceError::StdinWithArgument),
            "tty" => Ok(PassSource::Tty {
                prompt: arg.to_string(),
            }),
            _ => Err(SourceError::InvalidSource),
        }
    }
}

/// Custom serde deserializer so configs can carry a source spec string
impl<'de> Deserialize<'de> for PassSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PassSource::from_str(&s).map_err(serde::de::Error::custom)
    }
}
