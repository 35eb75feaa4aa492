use clap::Args;
use serde::Serialize;

use stash_utils::Prompter;

use super::CmdResult;

#[derive(Args)]
pub struct AskArgs {
    /// Question to show
    pub prompt: String,

    /// Hide input while typing; the answer is left out of the output
    #[arg(long)]
    pub masked: bool,

    /// Accept an empty answer instead of asking again
    #[arg(long)]
    pub allow_empty: bool,
}

#[derive(Serialize)]
pub struct AskOutput {
    pub command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub length: usize,
}

pub fn run(args: AskArgs) -> CmdResult<AskOutput> {
    let mut prompter = Prompter::terminal();
    let value = if args.allow_empty {
        prompter.read_line(&args.prompt, args.masked)?
    } else {
        prompter.read_non_empty(&args.prompt, args.masked)?
    };

    Ok((
        AskOutput {
            command: "ask",
            length: value.chars().count(),
            value: if args.masked { None } else { Some(value) },
        },
        0,
    ))
}
