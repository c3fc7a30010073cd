//! 1Password CLI backend
//!
//! Uses the `op` CLI to read the named item's password field. Requires the
//! CLI to be installed and authenticated.
//!
//! See: https://developer.1password.com/docs/cli

use crate::error::SourceError;
use crate::exec;

/// Resolve a secret from the 1Password item named `entry`.
pub(crate) fn resolve(entry: &str) -> Result<String, SourceError> {
    exec::run("op", &["item", "get", entry, "--fields", "password"], false)
}
