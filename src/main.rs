use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{ask, confirm, edit, env, path};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "stash-utils")]
#[command(version = VERSION)]
#[command(about = "Interactive prompt, environment, editor and path helpers")]
struct Cli {
    /// Verbose logging (includes timing lines)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Path normalization and directory creation
    Path(path::PathArgs),
    /// Environment variable lookup with default or prompt fallback
    Env(env::EnvArgs),
    /// Ask for a line of text
    Ask(ask::AskArgs),
    /// Ask a yes/no question
    Confirm(confirm::ConfirmArgs),
    /// Edit text in $EDITOR
    Edit(edit::EditArgs),
}

fn requires_tty(command: &Commands) -> bool {
    matches!(
        command,
        Commands::Ask(_) | Commands::Confirm(_) | Commands::Edit(_)
    )
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if requires_tty(&cli.command) {
        if let Err(err) = commands::require_tty() {
            let _ = output::print_result::<serde_json::Value>(Err(err));
            return std::process::ExitCode::from(exit_code_to_u8(2));
        }
    }

    let (json_result, exit_code) = commands::run_json(cli.command);
    let _ = output::print_json_result(json_result);

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
