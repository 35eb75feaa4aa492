use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::defaults::{DEFAULT_STASH_DIRECTORY, STASH_DIRECTORY_VAR};
use crate::env::{get_or_default, EnvStore};
use crate::error::{Error, Result};

/// Expand a leading `~` and resolve `path` to an absolute, canonical path.
///
/// Existing components are canonicalized (symlinks resolved); components that
/// do not exist yet are appended as-is, so this also works for files that are
/// about to be created.
pub fn normalize(path: impl AsRef<Path>) -> Result<PathBuf> {
    let expanded = expand_home(path.as_ref())?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| {
            Error::internal_io(e.to_string(), Some("resolve current directory".to_string()))
        })?;
        cwd.join(expanded)
    };

    resolve(&absolute)
}

/// Create the parent directory of `file_path` and any missing ancestors.
pub fn ensure_parent_dirs(file_path: impl AsRef<Path>) -> Result<()> {
    let normalized = normalize(file_path)?;
    let Some(parent) = normalized.parent() else {
        return Ok(());
    };

    fs::create_dir_all(parent).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("create directory {}", parent.display())),
        )
    })
}

/// Stash working directory: `$STASH_DIRECTORY`, or `.stash` under the
/// current directory.
pub fn stash_directory<E: EnvStore + ?Sized>(env: &E) -> Result<PathBuf> {
    normalize(get_or_default(env, STASH_DIRECTORY_VAR, DEFAULT_STASH_DIRECTORY))
}

fn expand_home(path: &Path) -> Result<PathBuf> {
    let Some(raw) = path.to_str() else {
        // Non-UTF-8 paths cannot carry a `~` we know how to expand.
        return Ok(path.to_path_buf());
    };

    if !starts_with_home_marker(raw) {
        return Ok(path.to_path_buf());
    }

    let home = dirs::home_dir().ok_or_else(|| {
        Error::internal_io(
            "home directory could not be determined",
            Some(format!("expand {}", raw)),
        )
    })?;

    let home = home.to_string_lossy().into_owned();
    let expanded = shellexpand::tilde_with_context(raw, || Some(home));
    Ok(PathBuf::from(expanded.into_owned()))
}

fn starts_with_home_marker(raw: &str) -> bool {
    match raw.strip_prefix('~') {
        Some(rest) => {
            rest.is_empty() || rest.starts_with('/') || rest.starts_with(std::path::MAIN_SEPARATOR)
        }
        None => false,
    }
}

fn resolve(absolute: &Path) -> Result<PathBuf> {
    let mut resolved = PathBuf::new();

    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                let candidate = resolved.join(name);
                resolved = match fs::canonicalize(&candidate) {
                    Ok(canonical) => canonical,
                    Err(e) if is_missing(&e) => candidate,
                    Err(e) => {
                        return Err(Error::internal_io(
                            e.to_string(),
                            Some(format!("resolve {}", candidate.display())),
                        ))
                    }
                };
            }
        }
    }

    Ok(resolved)
}

fn is_missing(err: &io::Error) -> bool {
    matches!(err.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory)
}
