//! Environment variable lookup with default and interactive fallbacks.
//!
//! The variable table is reached through [`EnvStore`] so the prompt flows can
//! run against an in-memory map instead of the process environment.

use std::collections::HashMap;

use crate::defaults::MISMATCH_NOTICE;
use crate::error::{Error, Result};
use crate::prompt::{LineSource, Prompter, TerminalSource};

pub trait EnvStore {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Reject names the process environment cannot hold: empty, or containing
/// `=` or NUL.
pub fn validate_var_name(name: &str) -> Result<()> {
    let problem = if name.is_empty() {
        "Variable name is empty"
    } else if name.contains('=') {
        "Variable name contains '='"
    } else if name.contains('\0') {
        "Variable name contains a NUL byte"
    } else {
        return Ok(());
    };

    Err(Error::validation_invalid_argument(
        "name",
        problem,
        Some(name.to_string()),
        None,
    ))
}

pub fn validate_var_value(name: &str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(Error::validation_invalid_argument(
            "value",
            "Variable value contains a NUL byte",
            Some(name.to_string()),
            None,
        ));
    }
    Ok(())
}

/// The real process environment.
///
/// Values written here are inherited by child processes spawned afterwards.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl EnvStore for SystemEnv {
    fn get(&self, name: &str) -> Option<String> {
        // Non-Unicode values are treated as unset.
        std::env::var(name).ok()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        validate_var_name(name)?;
        validate_var_value(name, value)?;
        std::env::set_var(name, value);
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryEnv {
    vars: HashMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvStore for MemoryEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    /// Applies the same checks as [`SystemEnv`] so flows behave alike on both.
    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        validate_var_name(name)?;
        validate_var_value(name, value)?;
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

/// How to ask for a variable that is not set.
#[derive(Debug, Clone)]
pub struct VarPrompt {
    pub name: String,
    pub message: String,
    pub masked: bool,
    /// Ask twice and require both entries to match.
    pub confirm: bool,
}

impl VarPrompt {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            masked: false,
            confirm: false,
        }
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn confirmed(mut self) -> Self {
        self.confirm = true;
        self
    }
}

pub fn get_or_default<E: EnvStore + ?Sized>(env: &E, name: &str, default: &str) -> String {
    env.get(name).unwrap_or_else(|| default.to_string())
}

/// Return the variable's value, prompting for it (and storing the answer) if
/// it is unset.
///
/// With `confirm`, a mismatch between the two entries restarts the whole
/// flow, including the lookup. An invalid variable name fails before anything
/// is asked.
pub fn get_or_prompt<E, S>(env: &mut E, prompter: &mut Prompter<S>, request: &VarPrompt) -> Result<String>
where
    E: EnvStore + ?Sized,
    S: LineSource,
{
    validate_var_name(&request.name)?;

    loop {
        if let Some(value) = env.get(&request.name) {
            return Ok(value);
        }

        let first = prompter.read_non_empty(&request.message, request.masked)?;
        if !request.confirm {
            env.set(&request.name, &first)?;
            return Ok(first);
        }

        let second = prompter.read_non_empty(&request.message, request.masked)?;
        if first == second {
            env.set(&request.name, &first)?;
            return Ok(first);
        }

        prompter.notify(MISMATCH_NOTICE);
    }
}

/// [`get_or_default`] against the process environment.
pub fn var_or_default(name: &str, default: &str) -> String {
    get_or_default(&SystemEnv, name, default)
}

/// [`get_or_prompt`] against the process environment and the terminal.
pub fn var_or_prompt(request: &VarPrompt) -> Result<String> {
    let mut prompter: Prompter<TerminalSource> = Prompter::terminal();
    get_or_prompt(&mut SystemEnv, &mut prompter, request)
}
