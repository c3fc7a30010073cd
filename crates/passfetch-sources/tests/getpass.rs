//! End-to-end tests for the public `getpass` entry point.

use std::io::{Seek, SeekFrom, Write};
use std::os::fd::AsRawFd;

use passfetch_sources::{getpass, SourceError};

#[test]
fn getpass_env() {
    std::env::set_var("GETPASS_IT_ENV", "password");
    assert_eq!(getpass(Some("env:GETPASS_IT_ENV")).unwrap(), "password");
    std::env::remove_var("GETPASS_IT_ENV");
}

#[test]
fn getpass_env_unset_names_the_variable() {
    let err = getpass(Some("env:GETPASS_IT_NOPE")).unwrap_err();
    assert!(err.to_string().contains("GETPASS_IT_NOPE"), "{err}");
}

#[test]
fn getpass_pass_is_verbatim_with_colons() {
    assert_eq!(
        getpass(Some("pass:anything:here even spaces")).unwrap(),
        "anything:here even spaces"
    );
}

#[test]
fn getpass_file_first_line_only() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "password").unwrap();
    writeln!(file, "trailing junk").unwrap();

    let spec = format!("file:{}", file.path().display());
    assert_eq!(getpass(Some(&spec)).unwrap(), "password");
}

#[test]
fn getpass_fd() {
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(b"password\n").unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let spec = format!("fd:{}", file.as_raw_fd());
    assert_eq!(getpass(Some(&spec)).unwrap(), "password");
}

#[test]
fn getpass_cmd() {
    assert_eq!(getpass(Some("cmd:echo hello")).unwrap(), "hello");
}

#[test]
fn getpass_cmd_failure_carries_stderr() {
    let err = getpass(Some("cmd:echo complaint >&2; exit 1")).unwrap_err();
    assert!(err.to_string().contains("complaint"), "{err}");
}

#[test]
fn getpass_unknown_scheme() {
    let err = getpass(Some("bogus:x")).unwrap_err();
    assert!(matches!(err, SourceError::InvalidSource));
    assert_eq!(err.to_string(), "invalid password source");
}

#[test]
fn getpass_scheme_without_argument() {
    let err = getpass(Some("file")).unwrap_err();
    assert!(matches!(err, SourceError::InvalidSource));
}

#[test]
fn getpass_stdin_rejects_argument() {
    let err = getpass(Some("stdin:0")).unwrap_err();
    assert_eq!(err.to_string(), "'stdin' takes no argument");
}

#[test]
fn getpass_is_idempotent_for_static_sources() {
    std::env::set_var("GETPASS_IT_STABLE", "stable");
    let first = getpass(Some("env:GETPASS_IT_STABLE")).unwrap();
    let second = getpass(Some("env:GETPASS_IT_STABLE")).unwrap();
    assert_eq!(first, second);
    std::env::remove_var("GETPASS_IT_STABLE");
}
