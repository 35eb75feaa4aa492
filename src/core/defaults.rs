//! Environment variable names and fallback values.

/// Variable naming the working directory used by stash tooling.
pub const STASH_DIRECTORY_VAR: &str = "STASH_DIRECTORY";

/// Used when `STASH_DIRECTORY` is unset. Relative to the current directory.
pub const DEFAULT_STASH_DIRECTORY: &str = ".stash";

/// Variable naming the external editor command.
pub const EDITOR_VAR: &str = "EDITOR";

/// Used when `EDITOR` resolves to an empty or whitespace-only value.
pub const DEFAULT_EDITOR: &str = "vim";

pub const EDITOR_PROMPT: &str = "Enter editor path: ";

/// Appended to every yes/no question.
pub const YES_NO_HINT: &str = " (yes/y/no/yes-to-all/no-to-all): ";

pub const EMPTY_INPUT_NOTICE: &str = "Input cannot be empty.";
pub const YES_NO_REJECTED_NOTICE: &str =
    "Invalid response. Please enter yes, y, no, n, yes-to-all or no-to-all.";
pub const MISMATCH_NOTICE: &str = "Values do not match. Please try again.";
