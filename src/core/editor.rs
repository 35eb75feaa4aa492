//! Edit text in the user's external editor.
//!
//! The editor comes from `$EDITOR` (prompting for it when unset). Only the
//! first whitespace-delimited token is used as the program; editor commands
//! with fixed leading arguments are not supported.

use std::io::Write;

use crate::command;
use crate::defaults::{DEFAULT_EDITOR, EDITOR_PROMPT, EDITOR_VAR};
use crate::env::{get_or_prompt, EnvStore, SystemEnv, VarPrompt};
use crate::error::{Error, Result};
use crate::io;
use crate::prompt::{LineSource, Prompter};

/// Program name taken from an `$EDITOR` value.
pub fn resolve_program(editor: &str) -> &str {
    editor.split_whitespace().next().unwrap_or(DEFAULT_EDITOR)
}

/// Write `content` to a temporary `.{extension}` file, open it in the editor,
/// and return the file's contents once the editor exits.
///
/// The editor's exit status is not inspected: whatever is on disk when it
/// exits is returned.
pub fn edit_in_editor<E, S>(
    env: &mut E,
    prompter: &mut Prompter<S>,
    extension: &str,
    content: &str,
) -> Result<String>
where
    E: EnvStore + ?Sized,
    S: LineSource,
{
    let editor = get_or_prompt(env, prompter, &VarPrompt::new(EDITOR_VAR, EDITOR_PROMPT))?;
    let program = resolve_program(&editor);

    let mut file = tempfile::Builder::new()
        .prefix("stash-edit-")
        .suffix(&suffix_for(extension))
        .tempfile()
        .map_err(|e| Error::internal_io(e.to_string(), Some("create temp file".to_string())))?;
    file.write_all(content.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| Error::internal_io(e.to_string(), Some("write temp file".to_string())))?;

    // Close our handle before the editor runs; the path is removed on drop.
    let path = file.into_temp_path();
    let shown_path = path.display().to_string();

    log_status!("edit", "Opening {} in {}", shown_path, program);
    let status = command::run_attached(program, [path.as_os_str()])
        .map_err(|e| Error::editor_launch_failed(program, &shown_path, e.to_string()))?;
    tracing::debug!(program, path = %shown_path, status = %status, "editor exited");

    let bytes = io::read_bytes(&path, "read edited file")?;
    String::from_utf8(bytes).map_err(|e| Error::encoding_invalid_utf8(&shown_path, &e))
}

/// [`edit_in_editor`] against the process environment and the terminal.
pub fn edit(extension: &str, content: &str) -> Result<String> {
    let mut prompter = Prompter::terminal();
    edit_in_editor(&mut SystemEnv, &mut prompter, extension, content)
}

fn suffix_for(extension: &str) -> String {
    let trimmed = extension.trim_start_matches('.');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(".{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryEnv;
    use crate::error::ErrorCode;
    use crate::prompt::ScriptedSource;

    fn no_answers() -> Prompter<ScriptedSource> {
        Prompter::new(ScriptedSource::new(Vec::<String>::new())).with_max_attempts(1)
    }

    #[test]
    fn resolve_program_takes_first_token() {
        assert_eq!(resolve_program("code --wait"), "code");
        assert_eq!(resolve_program("  nano  "), "nano");
    }

    #[test]
    fn resolve_program_defaults_to_vim() {
        assert_eq!(resolve_program(""), "vim");
        assert_eq!(resolve_program(" \t "), "vim");
    }

    #[test]
    fn suffix_handles_leading_dot_and_empty() {
        assert_eq!(suffix_for("md"), ".md");
        assert_eq!(suffix_for(".md"), ".md");
        assert_eq!(suffix_for(""), "");
    }

    #[cfg(unix)]
    #[test]
    fn edit_returns_unchanged_content_with_noop_editor() {
        let mut env = MemoryEnv::new().with("EDITOR", "true");
        let result = edit_in_editor(&mut env, &mut no_answers(), "txt", "unchanged").unwrap();
        assert_eq!(result, "unchanged");
    }

    #[cfg(unix)]
    #[test]
    fn edit_ignores_editor_exit_status() {
        let mut env = MemoryEnv::new().with("EDITOR", "false --ignored-arg");
        let result = edit_in_editor(&mut env, &mut no_answers(), "txt", "kept").unwrap();
        assert_eq!(result, "kept");
    }

    #[test]
    fn edit_reports_missing_editor() {
        let mut env = MemoryEnv::new().with("EDITOR", "nonexistent_editor_xyz");
        let err = edit_in_editor(&mut env, &mut no_answers(), "txt", "x").unwrap_err();

        assert_eq!(err.code, ErrorCode::EditorLaunchFailed);
        assert_eq!(err.details["program"], "nonexistent_editor_xyz");
    }

    #[test]
    fn edit_prompts_for_editor_when_unset() {
        let mut env = MemoryEnv::new();
        let mut prompter = Prompter::new(ScriptedSource::new(["nonexistent_editor_xyz"]));

        let err = edit_in_editor(&mut env, &mut prompter, "txt", "x").unwrap_err();

        assert_eq!(err.code, ErrorCode::EditorLaunchFailed);
        assert_eq!(env.get("EDITOR").as_deref(), Some("nonexistent_editor_xyz"));
        assert_eq!(prompter.source().prompts()[0].0, "Enter editor path: ");
    }
}
