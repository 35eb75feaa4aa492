use clap::{Args, Subcommand};
use serde::Serialize;

use stash_utils::env::{self, EnvStore, SystemEnv, VarPrompt};
use stash_utils::Prompter;

use super::{require_tty, CmdResult};

#[derive(Args)]
pub struct EnvArgs {
    #[command(subcommand)]
    command: EnvCommand,
}

#[derive(Subcommand)]
enum EnvCommand {
    /// Read a variable, falling back to a default
    Get {
        /// Variable name
        name: String,
        /// Value to report when the variable is unset
        #[arg(long, default_value = "")]
        default: String,
    },
    /// Read a variable, prompting for it when unset
    Prompt {
        /// Variable name
        name: String,
        /// Prompt text (default: "Enter <NAME>: ")
        #[arg(long)]
        message: Option<String>,
        /// Hide input while typing; the value is left out of the output
        #[arg(long)]
        masked: bool,
        /// Ask twice and require both entries to match
        #[arg(long)]
        confirm: bool,
    },
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    Environment,
    Default,
    Prompt,
}

#[derive(Serialize)]
pub struct EnvOutput {
    pub command: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub source: ValueSource,
}

pub fn run(args: EnvArgs) -> CmdResult<EnvOutput> {
    match args.command {
        EnvCommand::Get { name, default } => {
            let source = if SystemEnv.get(&name).is_some() {
                ValueSource::Environment
            } else {
                ValueSource::Default
            };
            let value = env::var_or_default(&name, &default);
            Ok((
                EnvOutput {
                    command: "env.get",
                    name,
                    value: Some(value),
                    source,
                },
                0,
            ))
        }
        EnvCommand::Prompt {
            name,
            message,
            masked,
            confirm,
        } => {
            let mut system = SystemEnv;
            let source = if system.get(&name).is_some() {
                ValueSource::Environment
            } else {
                require_tty()?;
                ValueSource::Prompt
            };

            let message = message.unwrap_or_else(|| format!("Enter {}: ", name));
            let mut request = VarPrompt::new(name.clone(), message);
            if masked {
                request = request.masked();
            }
            if confirm {
                request = request.confirmed();
            }

            let value = env::get_or_prompt(&mut system, &mut Prompter::terminal(), &request)?;
            Ok((
                EnvOutput {
                    command: "env.prompt",
                    name,
                    value: if masked { None } else { Some(value) },
                    source,
                },
                0,
            ))
        }
    }
}
