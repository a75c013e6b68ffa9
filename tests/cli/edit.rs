//! Tests for `depseal edit`.
//!
//! The editor is replaced with small shell commands, so these run on Unix only.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;

use crate::support::*;

#[test]
fn test_noop_edit_encrypts_plaintext() {
    let t = Test::with_secrets("staging", "hello");

    let output = t.edit_with("true");
    assert_success(&output);
    assert_sealed(&t.read_secrets());

    assert_success(&t.decrypt());
    assert_eq!(t.read_secrets(), b"hello");
}

#[test]
fn test_edit_applies_changes() {
    let t = Test::with_secrets("staging", "A=1\n");
    assert_success(&t.encrypt());

    // The temp file path is appended as the last argument
    let script = t.dir.path().join("append.sh");
    std::fs::write(&script, "#!/bin/sh\necho B=2 >> \"$1\"\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let output = t.edit_with(script.to_str().unwrap());
    assert_success(&output);
    assert_sealed(&t.read_secrets());

    let output = t.view();
    assert_success(&output);
    assert_eq!(stdout(&output), "A=1\nB=2\n");
}

#[test]
fn test_failing_editor_leaves_file() {
    let t = Test::with_secrets("staging", "A=1\n");
    assert_success(&t.encrypt());
    let sealed = t.read_secrets();

    let output = t.edit_with("false");
    assert_failure(&output);
    assert_stderr_contains(&output, "editor failed");
    assert_eq!(t.read_secrets(), sealed);
}

#[test]
fn test_edit_uses_editor_env_var() {
    let t = Test::with_secrets("staging", "A=1\n");

    let output = t.cmd().arg("edit").env("EDITOR", "true").output().unwrap();
    assert_success(&output);
    assert_sealed(&t.read_secrets());
}

#[test]
fn test_edit_fails_fast_without_key() {
    let t = Test::new();
    t.write_config("[depseal]\ndeployment = \"staging\"\n");
    t.write_secrets(b"A=1\n");

    let output = t.edit_with("true");
    assert_failure(&output);
    assert_stderr_contains(&output, "keyring not found");
    assert_eq!(t.read_secrets(), b"A=1\n");
}
