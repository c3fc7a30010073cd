//! File backend with `~` and environment expansion

use std::fs::File;
use std::io::{BufRead, BufReader};

use users::os::unix::UserExt;

use crate::backends::strip_line_terminator;
use crate::error::SourceError;

/// Resolve a secret from the first line of `path`.
///
/// The path need not be a regular file; a pipe or device that yields one
/// line works too.
pub(crate) fn resolve(path: &str) -> Result<String, SourceError> {
    let expanded = expand(path);

    let file = File::open(&expanded).map_err(|e| SourceError::file(&expanded, e.to_string()))?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| SourceError::file(&expanded, e.to_string()))?;

    Ok(strip_line_terminator(&line).to_string())
}

/// Expand a leading `~/` or `~user/`, then `$VAR` references.
///
/// An unknown user leaves the path untouched; unset variables expand to the
/// empty string.
fn expand(path: &str) -> String {
    let tilde_expanded = match path.strip_prefix('~') {
        Some(rest) => match rest.split_once('/') {
            Some(("", tail)) => match dirs::home_dir() {
                Some(home) => format!("{}/{}", home.display(), tail),
                None => path.to_string(),
            },
            Some((name, tail)) => match users::get_user_by_name(name) {
                Some(user) => format!("{}/{}", user.home_dir().display(), tail),
                None => path.to_string(),
            },
            None => path.to_string(),
        },
        None => path.to_string(),
    };

    shellexpand::env_with_context_no_errors(&tilde_expanded, |var| {
        Some(std::env::var(var).unwrap_or_default())
    })
    .into_owned()
}
