use clap::{Args, Subcommand};
use serde::Serialize;

use stash_utils::paths;
use stash_utils::SystemEnv;

use super::CmdResult;

#[derive(Args)]
pub struct PathArgs {
    #[command(subcommand)]
    command: PathCommand,
}

#[derive(Subcommand)]
enum PathCommand {
    /// Expand `~` and resolve a path to its absolute, canonical form
    Normalize {
        /// Path to resolve (need not exist)
        path: String,
    },
    /// Create the parent directories of a file path
    EnsureParent {
        /// File path whose parent directories should exist
        path: String,
    },
    /// Show the resolved stash working directory ($STASH_DIRECTORY or .stash)
    StashDir,
}

#[derive(Serialize)]
pub struct PathOutput {
    pub command: &'static str,
    pub input: Option<String>,
    pub path: String,
}

pub fn run(args: PathArgs) -> CmdResult<PathOutput> {
    match args.command {
        PathCommand::Normalize { path } => {
            let resolved = paths::normalize(&path)?;
            Ok((
                PathOutput {
                    command: "path.normalize",
                    input: Some(path),
                    path: resolved.display().to_string(),
                },
                0,
            ))
        }
        PathCommand::EnsureParent { path } => {
            paths::ensure_parent_dirs(&path)?;
            let resolved = paths::normalize(&path)?;
            let parent = resolved
                .parent()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| resolved.display().to_string());
            Ok((
                PathOutput {
                    command: "path.ensure_parent",
                    input: Some(path),
                    path: parent,
                },
                0,
            ))
        }
        PathCommand::StashDir => {
            let dir = paths::stash_directory(&SystemEnv)?;
            Ok((
                PathOutput {
                    command: "path.stash_dir",
                    input: None,
                    path: dir.display().to_string(),
                },
                0,
            ))
        }
    }
}
