pub type CmdResult<T> = stash_utils::Result<(T, i32)>;

pub mod ask;
pub mod confirm;
pub mod edit;
pub mod env;
pub mod path;

/// Fail unless stdin and stdout are both terminals.
pub(crate) fn require_tty() -> stash_utils::Result<()> {
    if stash_utils::tty::require_tty_for_interactive() {
        Ok(())
    } else {
        Err(stash_utils::Error::validation_invalid_argument(
            "tty",
            "This command requires an interactive TTY",
            None,
            None,
        ))
    }
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args))
    };
}

pub(crate) fn run_json(command: crate::Commands) -> (stash_utils::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Path(args) => dispatch!(args, path),
        crate::Commands::Env(args) => dispatch!(args, env),
        crate::Commands::Ask(args) => dispatch!(args, ask),
        crate::Commands::Confirm(args) => dispatch!(args, confirm),
        crate::Commands::Edit(args) => dispatch!(args, edit),
    }
}
