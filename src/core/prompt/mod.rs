mod types;

pub use types::*;

use std::collections::VecDeque;

use crate::defaults::{EMPTY_INPUT_NOTICE, YES_NO_HINT, YES_NO_REJECTED_NOTICE};
use crate::error::{Error, Result};
use crate::tty;

/// Where prompt answers come from and where notices go.
pub trait LineSource {
    /// Show `prompt` and read one line. End of input yields `""`.
    fn read_line(&mut self, prompt: &str, masked: bool) -> Result<String>;

    /// Show a short diagnostic (rejection reason, mismatch notice).
    fn notify(&mut self, message: &str);
}

/// The interactive terminal: stdout for prompts, stdin for answers.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSource;

impl LineSource for TerminalSource {
    fn read_line(&mut self, prompt: &str, masked: bool) -> Result<String> {
        if masked {
            tty::prompt_password(prompt)
        } else {
            tty::prompt(prompt)
        }
    }

    fn notify(&mut self, message: &str) {
        tty::notice(message);
    }
}

/// Replays a fixed list of answers and records what was asked.
///
/// Once the answers run out every read returns `""`, as a terminal does at
/// end of input.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    answers: VecDeque<String>,
    prompts: Vec<(String, bool)>,
    notices: Vec<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Every prompt shown so far, with its masked flag.
    pub fn prompts(&self) -> &[(String, bool)] {
        &self.prompts
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self, prompt: &str, masked: bool) -> Result<String> {
        self.prompts.push((prompt.to_string(), masked));
        Ok(self.answers.pop_front().unwrap_or_default())
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Retrying prompt reader on top of a [`LineSource`].
///
/// Readers loop until the input is accepted. With no attempt limit (the
/// default) they block for as long as the source keeps producing rejected
/// input.
pub struct Prompter<S: LineSource> {
    source: S,
    max_attempts: Option<usize>,
}

impl Prompter<TerminalSource> {
    pub fn terminal() -> Self {
        Self::new(TerminalSource)
    }
}

impl Default for Prompter<TerminalSource> {
    fn default() -> Self {
        Self::terminal()
    }
}

impl<S: LineSource> Prompter<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_attempts: None,
        }
    }

    /// Give up with `validation.attempts_exhausted` after `attempts` rejected
    /// reads in a single call.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts.max(1));
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    pub fn notify(&mut self, message: &str) {
        self.source.notify(message);
    }

    /// Single unvalidated read.
    pub fn read_line(&mut self, prompt: &str, masked: bool) -> Result<String> {
        self.source.read_line(prompt, masked)
    }

    pub fn read_non_empty(&mut self, prompt: &str, masked: bool) -> Result<String> {
        self.read_validated(prompt, masked, |input| {
            if input.is_empty() {
                Err(EMPTY_INPUT_NOTICE.to_string())
            } else {
                Ok(())
            }
        })
    }

    /// Read until `predicate` accepts. A rejection reason is shown to the
    /// user before the next read.
    pub fn read_validated<F>(&mut self, prompt: &str, masked: bool, mut predicate: F) -> Result<String>
    where
        F: FnMut(&str) -> std::result::Result<(), String>,
    {
        self.read_parsed(prompt, masked, |input| {
            predicate(input).map(|()| input.to_string())
        })
    }

    pub fn read_yes_no(&mut self, prompt: &str) -> Result<UserResponse> {
        let question = format!("{}{}", prompt, YES_NO_HINT);
        self.read_parsed(&question, false, |input| {
            UserResponse::parse(input).ok_or_else(|| YES_NO_REJECTED_NOTICE.to_string())
        })
    }

    /// Core retry loop: read, convert, and either return or report and retry.
    fn read_parsed<T, F>(&mut self, prompt: &str, masked: bool, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, String>,
    {
        let mut attempts = 0usize;
        loop {
            let input = self.source.read_line(prompt, masked)?;
            attempts += 1;

            match parse(&input) {
                Ok(value) => return Ok(value),
                Err(reason) => self.source.notify(&reason),
            }

            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    return Err(Error::validation_attempts_exhausted(prompt, attempts));
                }
            }
        }
    }
}
