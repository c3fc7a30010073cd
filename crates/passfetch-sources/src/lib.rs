//! Password retrieval from a variety of sources
//!
//! A single `scheme:argument` string selects where the secret comes from:
//!
//! - **Shell command** (`cmd:command`): trimmed stdout of `/bin/sh -c command`
//! - **Environment** (`env:var`): visible to other processes via e.g. ps(1),
//!   use with caution
//! - **File descriptor** (`fd:num`): first line of an already-open descriptor
//! - **File** (`file:pathname`): first line of a file; `~`, `~user` and
//!   `$VAR` references are expanded
//! - **macOS keychain** (`keychain:name`): via the security(1) utility
//! - **LastPass** (`lpass:name`): via the lpass(1) CLI
//! - **1Password** (`op:name`): via the op(1) CLI
//! - **Literal** (`pass:password`): the argument itself; leaks into shell
//!   history, only for throwaway use
//! - **Stdin** (`stdin`): alias for `fd:0`
//! - **Terminal** (`tty` or `tty:prompt`): prompt on the controlling
//!   terminal with echo disabled; this is the default
//!
//! # Example
//!
//! ```rust,ignore
//! use passfetch_sources::{getpass, PassSource, SourceResolver};
//!
//! // One-shot; `None` prompts interactively on the controlling terminal.
//! let secret = getpass(Some("env:MY_SECRET"))?;
//!
//! // Or parse once and resolve explicitly:
//! let source: PassSource = "file:~/.secret".parse()?;
//! let secret = SourceResolver::new().resolve(&source)?;
//! ```

mod backends;
mod error;
mod exec;
mod resolver;
mod source;
pub mod tty;

pub use error::SourceError;
pub use resolver::SourceResolver;
pub use source::{PassSource, DEFAULT_PROMPT};

/// Retrieve a secret from the source described by `passfrom`.
///
/// With `None` the user is prompted on the controlling terminal using
/// [`DEFAULT_PROMPT`].
pub fn getpass(passfrom: Option<&str>) -> Result<String, SourceError> {
    let source = match passfrom {
        Some(spec) => spec.parse()?,
        None => PassSource::default(),
    };
    SourceResolver::new().resolve(&source)
}
