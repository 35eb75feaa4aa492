//! Terminal I/O primitives.
//!
//! Provides TTY detection and raw line reading. Everything that talks to the
//! interactive terminal goes through here.

use std::io::{self, BufRead, IsTerminal, Write};

use crate::error::{Error, Result};

pub fn is_stdin_tty() -> bool {
    io::stdin().is_terminal()
}

pub fn is_stdout_tty() -> bool {
    io::stdout().is_terminal()
}

pub fn require_tty_for_interactive() -> bool {
    is_stdin_tty() && is_stdout_tty()
}

/// Print `message` to stdout and read one line from stdin.
///
/// Returns an empty string at end of input.
pub fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .map_err(|e| Error::internal_io(e.to_string(), Some("read input".to_string())))?;

    Ok(strip_line_ending(&line).to_string())
}

/// Read one line without echoing it. The prompt is drawn on stdout, like
/// [`prompt`].
///
/// Returns an empty string at end of input, or when stdout is not a terminal.
pub fn prompt_password(message: &str) -> Result<String> {
    // The theme renders its own ": " after the prompt text.
    let label = message.trim_end().trim_end_matches(':');

    match dialoguer::Password::new()
        .with_prompt(label)
        .allow_empty_password(true)
        .interact_on(&dialoguer::console::Term::stdout())
    {
        Ok(value) => Ok(value),
        Err(dialoguer::Error::IO(e)) if is_absent_input(&e) => Ok(String::new()),
        Err(dialoguer::Error::IO(e)) => Err(Error::internal_io(
            e.to_string(),
            Some("read masked input".to_string()),
        )),
    }
}

/// Errors that mean there is no input to read, as opposed to a failed read.
fn is_absent_input(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::UnexpectedEof | io::ErrorKind::NotConnected
    )
}

/// Print a diagnostic line for the user.
pub fn notice(message: &str) {
    println!("{}", message);
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
