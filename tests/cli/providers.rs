//! Tests for the env and command key providers.

use predicates::prelude::*;

use crate::support::*;

#[test]
fn test_env_provider_roundtrip() {
    let t = Test::new();
    t.write_config("[depseal]\ndeployment = \"ci\"\n\n[provider]\nkind = \"env\"\n");
    t.write_secrets(SAMPLE_SECRETS.as_bytes());

    let output = t
        .cmd()
        .env("DEPSEAL_KEY", KEY_32)
        .env("DEPSEAL_NONCE", NONCE_12)
        .arg("encrypt")
        .output()
        .unwrap();
    assert_success(&output);
    assert_sealed(&t.read_secrets());

    let output = t
        .cmd()
        .env("DEPSEAL_KEY", KEY_32)
        .env("DEPSEAL_NONCE", NONCE_12)
        .arg("view")
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(output.stdout, SAMPLE_SECRETS.as_bytes());
}

#[test]
fn test_env_provider_missing_vars() {
    let t = Test::new();
    t.write_config("[depseal]\ndeployment = \"ci\"\n\n[provider]\nkind = \"env\"\n");
    t.write_secrets(SAMPLE_SECRETS.as_bytes());

    let output = t.encrypt();
    assert_failure(&output);
    assert_stderr_contains(&output, "DEPSEAL_KEY");
    assert_eq!(t.read_secrets(), SAMPLE_SECRETS.as_bytes());
}

#[test]
fn test_short_key_rejected() {
    let t = Test::new();
    t.write_config("[depseal]\ndeployment = \"ci\"\n\n[provider]\nkind = \"env\"\n");
    t.write_secrets(SAMPLE_SECRETS.as_bytes());

    let output = t
        .cmd()
        .env("DEPSEAL_KEY", SHORT_KEY)
        .env("DEPSEAL_NONCE", NONCE_12)
        .arg("encrypt")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid key length");
    assert_eq!(t.read_secrets(), SAMPLE_SECRETS.as_bytes());
}

#[cfg(unix)]
#[test]
fn test_command_provider_roundtrip() {
    let t = Test::new();
    let script = format!(
        "echo '{{\"key\":\"{}\",\"nonce\":\"{}\"}}'",
        KEY_32, NONCE_12
    );
    t.write_config(&format!(
        "[depseal]\ndeployment = \"prod\"\n\n[provider]\nkind = \"command\"\ncommand = [\"sh\", \"-c\", {:?}]\n",
        script
    ));
    t.write_secrets(SAMPLE_SECRETS.as_bytes());

    assert_success(&t.encrypt());
    assert_sealed(&t.read_secrets());

    assert_success(&t.decrypt());
    assert_eq!(t.read_secrets(), SAMPLE_SECRETS.as_bytes());
}

#[cfg(unix)]
#[test]
fn test_command_provider_failure() {
    let t = Test::new();
    t.write_config(
        "[depseal]\ndeployment = \"prod\"\n\n[provider]\nkind = \"command\"\ncommand = [\"sh\", \"-c\", \"echo access denied >&2; exit 1\"]\n",
    );
    t.write_secrets(SAMPLE_SECRETS.as_bytes());

    let output = t.encrypt();
    assert_failure(&output);
    assert_stderr_contains(&output, "access denied");
    assert_eq!(t.read_secrets(), SAMPLE_SECRETS.as_bytes());
}

#[cfg(unix)]
#[test]
fn test_loose_keyring_permissions_warn() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::with_secrets("staging", SAMPLE_SECRETS);
    std::fs::set_permissions(t.keyring_path(), std::fs::Permissions::from_mode(0o644)).unwrap();

    t.cmd()
        .arg("encrypt")
        .assert()
        .success()
        .stderr(predicate::str::contains("chmod 600"));
    assert_sealed(&t.read_secrets());
}

#[cfg(unix)]
#[test]
fn test_owner_only_keyring_is_quiet() {
    let t = Test::with_secrets("staging", SAMPLE_SECRETS);

    t.cmd()
        .arg("encrypt")
        .assert()
        .success()
        .stderr(predicate::str::contains("chmod").not());
}
