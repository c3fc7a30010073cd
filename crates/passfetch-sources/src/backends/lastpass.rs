//! LastPass CLI backend
//!
//! Uses the `lpass` CLI to read the named password. The user should have
//! run `lpass login` beforehand.
//!
//! See: https://github.com/lastpass/lastpass-cli

use crate::error::SourceError;
use crate::exec;

/// Resolve a secret from the LastPass entry named `entry`.
pub(crate) fn resolve(entry: &str) -> Result<String, SourceError> {
    exec::run("lpass", &["show", entry, "--password"], false)
}
