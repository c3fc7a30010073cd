//! Interactive secret capture on the controlling terminal
//!
//! Echo is disabled for the duration of the read and restored on every exit
//! path: normal completion, read errors, and SIGINT/SIGTERM delivered while
//! the read is blocked. At most one interactive read per process may be in
//! flight at a time; concurrent prompts on the same terminal are out of
//! contract.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::os::fd::{AsFd, OwnedFd};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use nix::sys::termios::{self, LocalFlags, SetArg, Termios};
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::iterator::Signals;

use crate::backends::strip_line_terminator;
use crate::error::SourceError;

/// Saved terminal mode for one interactive read.
///
/// The reading thread and the signal watcher may both ask for restoration;
/// the atomic flag makes whichever call comes second a no-op.
struct EchoGuard {
    tty: OwnedFd,
    saved: Termios,
    restored: AtomicBool,
}

// SAFETY: `Termios` is `Send` but not `Sync` because it wraps a `RefCell`.
// The only access to that cell is through `restore()`, whose `restored` atomic
// makes every caller after the first a no-op, so `tcsetattr(&self.saved)` (the
// sole borrow) runs on exactly one thread. No two threads ever touch the cell
// concurrently, so sharing `&EchoGuard` across threads is sound.
unsafe impl Sync for EchoGuard {}

impl EchoGuard {
    fn new(tty: OwnedFd, saved: Termios) -> Self {
        Self {
            tty,
            saved,
            restored: AtomicBool::new(false),
        }
    }

    /// Put the terminal back into its saved mode. First caller wins.
    fn restore(&self) {
        if self.restored.swap(true, Ordering::SeqCst) {
            return;
        }
        let _ = termios::tcsetattr(self.tty.as_fd(), SetArg::TCSANOW, &self.saved);
    }
}

impl Drop for EchoGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Prompt on `/dev/tty` and read one line with echo disabled.
///
/// The prompt is written without a trailing newline; a newline is emitted
/// after the read, since the user's own keystroke was not echoed. The read
/// blocks until a line terminator arrives, the terminal is closed, or the
/// process is interrupted.
pub fn read_secret(prompt: &str) -> Result<String, SourceError> {
    let tty = OpenOptions::new()
        .read(true)
        .write(true)
        .open("/dev/tty")
        .map_err(|e| SourceError::TtyOpen(e.to_string()))?;

    write_tty(&tty, prompt.as_bytes());

    let saved =
        termios::tcgetattr(tty.as_fd()).map_err(|e| SourceError::TtyConfig(e.to_string()))?;
    let guard_fd = tty
        .as_fd()
        .try_clone_to_owned()
        .map_err(|e| SourceError::TtyConfig(e.to_string()))?;
    let guard = Arc::new(EchoGuard::new(guard_fd, saved.clone()));

    // The watcher must be in place before echo goes off: a signal arriving
    // in between restores the still-unchanged mode, which is harmless.
    let mut signals =
        Signals::new([SIGINT, SIGTERM]).map_err(|e| SourceError::TtyConfig(e.to_string()))?;
    let handle = signals.handle();
    let watcher = {
        let guard = Arc::clone(&guard);
        thread::spawn(move || {
            for sig in signals.forever() {
                guard.restore();
                std::process::exit(128 + sig);
            }
        })
    };

    let mut noecho = saved.clone();
    noecho.local_flags.remove(LocalFlags::ECHO);
    let result = termios::tcsetattr(tty.as_fd(), SetArg::TCSAFLUSH, &noecho)
        .map_err(|e| SourceError::TtyConfig(e.to_string()))
        .and_then(|()| read_line(&tty));

    // Restore before surfacing any read error, then tear the watcher down so
    // the session does not outlive this call.
    guard.restore();
    handle.close();
    let _ = watcher.join();

    let line = result?;
    write_tty(&tty, b"\n");

    Ok(line)
}

fn read_line(tty: &File) -> Result<String, SourceError> {
    let mut line = String::new();
    let n = BufReader::new(tty)
        .read_line(&mut line)
        .map_err(|e| SourceError::TtyRead(e.to_string()))?;
    if n == 0 {
        return Err(SourceError::TtyRead("end of input from terminal".to_string()));
    }
    Ok(strip_line_terminator(&line).to_string())
}

/// Best-effort write; prompt output failing is not worth aborting the read.
fn write_tty(mut tty: &File, bytes: &[u8]) {
    let _ = tty.write_all(bytes);
    let _ = tty.flush();
}
