//! Shared subprocess invocation for the external-tool backends

use std::fs::File;
use std::process::{Command, Stdio};

use crate::error::SourceError;

/// Run an external command and return its trimmed stdout.
///
/// With `attach_tty` the controlling terminal is connected to the child's
/// stdin so programs that prompt on their own keep working; when no terminal
/// is available the child inherits our stdin instead. Without `attach_tty`
/// the child gets no input at all.
pub(crate) fn run(program: &str, args: &[&str], attach_tty: bool) -> Result<String, SourceError> {
    let display = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if attach_tty {
        match File::open("/dev/tty") {
            Ok(tty) => {
                cmd.stdin(Stdio::from(tty));
            }
            Err(_) => {
                cmd.stdin(Stdio::inherit());
            }
        }
    }

    let output = cmd.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SourceError::subprocess(&display, format!("'{program}' not found in PATH"))
        } else {
            SourceError::subprocess(&display, e.to_string())
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SourceError::subprocess(
            &display,
            format!("{}: {}", output.status, stderr.trim()),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
