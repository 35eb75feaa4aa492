use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use stash_utils::{editor, io, paths, timing};

use super::CmdResult;

#[derive(Args)]
pub struct EditArgs {
    /// Extension for the temporary file (default: from --file, else "txt")
    #[arg(long = "ext", value_name = "EXT")]
    pub extension: Option<String>,

    /// Start from this file's contents (a missing file starts empty)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Write the edited content back to --file
    #[arg(long, requires = "file")]
    pub in_place: bool,
}

#[derive(Serialize)]
pub struct EditOutput {
    pub command: &'static str,
    pub content: String,
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written: Option<String>,
}

pub fn run(args: EditArgs) -> CmdResult<EditOutput> {
    timing::with_timing("edit", || edit(args))
}

fn edit(args: EditArgs) -> CmdResult<EditOutput> {
    let initial = match &args.file {
        Some(path) if path.exists() => io::read_file(path, "read initial content")?,
        _ => String::new(),
    };

    let extension = args
        .extension
        .clone()
        .or_else(|| args.file.as_deref().and_then(extension_of))
        .unwrap_or_else(|| "txt".to_string());

    let content = editor::edit(&extension, &initial)?;
    let changed = content != initial;

    let written = match (&args.file, args.in_place) {
        (Some(path), true) => {
            paths::ensure_parent_dirs(path)?;
            let target = paths::normalize(path)?;
            io::write_file(&target, &content, "write edited content")?;
            Some(target.display().to_string())
        }
        _ => None,
    };

    Ok((
        EditOutput {
            command: "edit",
            content,
            changed,
            written,
        },
        0,
    ))
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_string)
}
