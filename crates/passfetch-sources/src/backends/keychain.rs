//! macOS keychain backend
//!
//! Uses the security(1) utility to look up a generic password entry, so it
//! works with whatever keychain the user has unlocked.

use crate::error::SourceError;
use crate::exec;

/// Resolve a secret from the keychain entry named `entry`.
pub(crate) fn resolve(entry: &str) -> Result<String, SourceError> {
    exec::run(
        "security",
        &["find-generic-password", "-s", entry, "-w"],
        false,
    )
}
