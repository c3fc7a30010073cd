//! Shell command backend

use crate::error::SourceError;
use crate::exec;

/// Run `command` through the shell and capture the secret from its stdout.
///
/// The controlling terminal is attached as the child's stdin, so commands
/// that prompt interactively themselves keep working.
pub(crate) fn resolve(command: &str) -> Result<String, SourceError> {
    exec::run("/bin/sh", &["-c", command], true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_echo() {
        let result = resolve("echo hello").unwrap();
        assert_eq!(result, "hello");
    }

    #[test]
    fn test_resolve_failing_command() {
        let err = resolve("echo broken >&2; exit 1").unwrap_err();
        assert!(err.to_string().contains("broken"), "{err}");
    }

    #[test]
    fn test_resolve_missing_binary() {
        let err = resolve("definitely-not-a-real-tool-12345").unwrap_err();
        assert!(matches!(err, SourceError::Subprocess { .. }));
    }
}
