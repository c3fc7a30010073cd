//! Pre-opened file descriptor backend

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::mem::ManuallyDrop;
use std::os::fd::{FromRawFd, RawFd};

use crate::backends::strip_line_terminator;
use crate::error::SourceError;

/// Read the first line from an already-open descriptor.
///
/// The descriptor stays owned by the caller and is not closed here. A closed
/// or invalid descriptor surfaces as a read error; there is no fallback to
/// path-based opening.
pub(crate) fn resolve(fd: RawFd) -> Result<String, SourceError> {
    // ManuallyDrop keeps the caller's descriptor open once we are done.
    let file = ManuallyDrop::new(unsafe { File::from_raw_fd(fd) });
    let mut line = String::new();
    BufReader::new(&*file)
        .read_line(&mut line)
        .map_err(|e| SourceError::FdRead {
            fd,
            message: e.to_string(),
        })?;
    Ok(strip_line_terminator(&line).to_string())
}

#[cfg(test)]
mod tests {
    use std::io::{Seek, SeekFrom, Write};
    use std::os::fd::AsRawFd;

    use super::*;

    #[test]
    fn test_resolve_reads_first_line() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"password\nsecond line\n").unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();

        let result = resolve(file.as_raw_fd()).unwrap();
        assert_eq!(result, "password");
    }

    #[test]
    fn test_resolve_leaves_descriptor_open() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"password\n").unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();

        resolve(file.as_raw_fd()).unwrap();

        // Still usable after the read.
        file.seek(SeekFrom::Start(0)).unwrap();
    }

    #[test]
    fn test_resolve_bad_descriptor() {
        // Way above any descriptor this test process has open.
        let result = resolve(4096);
        assert!(matches!(result, Err(SourceError::FdRead { fd: 4096, .. })));
    }
}
