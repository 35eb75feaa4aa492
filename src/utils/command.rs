//! Command execution primitives.

use std::ffi::OsStr;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

/// Run a program in the foreground with the current terminal attached.
///
/// Blocks until the program exits. The spawn error is returned as-is so the
/// caller can decide which error kind a failed launch maps to.
pub fn run_attached<I, A>(program: &str, args: I) -> io::Result<ExitStatus>
where
    I: IntoIterator<Item = A>,
    A: AsRef<OsStr>,
{
    Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
}
