use clap::Args;
use serde::Serialize;

use stash_utils::{Prompter, UserResponse};

use super::CmdResult;

#[derive(Args)]
pub struct ConfirmArgs {
    /// Question to show; the yes/no hint is appended
    pub prompt: String,
}

#[derive(Serialize)]
pub struct ConfirmOutput {
    pub command: &'static str,
    pub response: UserResponse,
    pub is_yes: bool,
    pub applies_to_all: bool,
}

/// Exit code is 0 for yes answers and 1 for no answers, so shell scripts can
/// branch on it directly.
pub fn run(args: ConfirmArgs) -> CmdResult<ConfirmOutput> {
    let response = Prompter::terminal().read_yes_no(&args.prompt)?;
    let exit_code = if response.is_yes() { 0 } else { 1 };

    Ok((
        ConfirmOutput {
            command: "confirm",
            response,
            is_yes: response.is_yes(),
            applies_to_all: response.applies_to_all(),
        },
        exit_code,
    ))
}
