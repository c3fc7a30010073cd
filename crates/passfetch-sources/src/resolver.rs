//! Password source dispatch

use crate::backends;
use crate::error::SourceError;
use crate::source::PassSource;
use crate::tty;

/// Resolves a parsed [`PassSource`] to the secret it designates.
///
/// Resolution is synchronous and performs exactly one retrieval; there is no
/// fallback between sources and no retry.
#[derive(Debug, Default)]
pub struct SourceResolver {
    _private: (), // Prevent construction without ::new()
}

impl SourceResolver {
    /// Create a new source resolver
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Resolve a source to its secret value
    pub fn resolve(&self, source: &PassSource) -> Result<String, SourceError> {
        tracing::debug!(source = source.kind_name(), "resolving password source");

        match source {
            PassSource::Cmd { command } => backends::command::resolve(command),
            PassSource::Env { var } => backends::env::resolve(var),
            PassSource::Fd { fd } => backends::fd::resolve(*fd),
            PassSource::File { path } => backends::file::resolve(path),
            PassSource::Keychain { entry } => backends::keychain::resolve(entry),
            PassSource::Lastpass { entry } => backends::lastpass::resolve(entry),
            PassSource::Onepassword { entry } => backends::onepassword::resolve(entry),
            PassSource::Pass { value } => Ok(value.clone()),
            PassSource::Stdin => backends::fd::resolve(0),
            PassSource::Tty { prompt } => tty::read_secret(prompt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_pass_is_verbatim() {
        let resolver = SourceResolver::new();
        let source = PassSource::Pass {
            value: "left:as-is ".to_string(),
        };
        assert_eq!(resolver.resolve(&source).unwrap(), "left:as-is ");
    }

    #[test]
    fn test_resolve_env() {
        std::env::set_var("PASSFETCH_TEST_RESOLVER_VAR", "resolver-value");
        let resolver = SourceResolver::new();
        let source = PassSource::Env {
            var: "PASSFETCH_TEST_RESOLVER_VAR".to_string(),
        };
        assert_eq!(resolver.resolve(&source).unwrap(), "resolver-value");
        std::env::remove_var("PASSFETCH_TEST_RESOLVER_VAR");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        std::env::set_var("PASSFETCH_TEST_IDEMPOTENT_VAR", "same-every-time");
        let resolver = SourceResolver::new();
        let source = PassSource::Env {
            var: "PASSFETCH_TEST_IDEMPOTENT_VAR".to_string(),
        };
        let first = resolver.resolve(&source).unwrap();
        let second = resolver.resolve(&source).unwrap();
        assert_eq!(first, second);
        std::env::remove_var("PASSFETCH_TEST_IDEMPOTENT_VAR");
    }
}
