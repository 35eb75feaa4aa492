#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use stash_utils::editor::edit_in_editor;
use stash_utils::{EnvStore, ErrorCode, MemoryEnv, Prompter, ScriptedSource};
use tempfile::TempDir;

fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn no_answers() -> Prompter<ScriptedSource> {
    Prompter::new(ScriptedSource::new(Vec::<String>::new())).with_max_attempts(1)
}

#[test]
fn stub_editor_appends_to_content() {
    let dir = TempDir::new().unwrap();
    let stub = write_stub(dir.path(), "append-world", r#"printf ' world' >> "$1""#);
    let mut env = MemoryEnv::new().with("EDITOR", format!("{} --wait", stub.display()));

    let result = edit_in_editor(&mut env, &mut no_answers(), "txt", "hello").unwrap();

    assert_eq!(result, "hello world");
}

#[test]
fn stub_editor_sees_extension_and_temp_file_is_removed() {
    let dir = TempDir::new().unwrap();
    let record = dir.path().join("seen-path");
    let stub = write_stub(
        dir.path(),
        "record-path",
        &format!(r#"printf '%s' "$1" > '{}'"#, record.display()),
    );
    let mut env = MemoryEnv::new();
    let mut prompter = Prompter::new(ScriptedSource::new([stub.display().to_string()]));

    let result = edit_in_editor(&mut env, &mut prompter, ".md", "# title").unwrap();

    assert_eq!(result, "# title");
    assert!(env.get("EDITOR").is_some());

    let seen = fs::read_to_string(&record).unwrap();
    assert!(seen.ends_with(".md"), "{}", seen);
    assert!(!seen.ends_with("..md"), "{}", seen);
    assert!(!Path::new(&seen).exists());
}

#[test]
fn invalid_utf8_from_editor_is_an_encoding_error() {
    let dir = TempDir::new().unwrap();
    let stub = write_stub(dir.path(), "corrupt", r#"printf '\377' >> "$1""#);
    let mut env = MemoryEnv::new().with("EDITOR", stub.display().to_string());

    let err = edit_in_editor(&mut env, &mut no_answers(), "txt", "ok").unwrap_err();

    assert_eq!(err.code, ErrorCode::EncodingInvalidUtf8);
    assert_eq!(err.details["validUpTo"], 2);
}
