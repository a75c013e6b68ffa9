//! Tests for `depseal keygen`.

use depseal::core::codec;
use predicates::prelude::*;

use crate::support::*;

#[test]
fn test_keygen_prints_material() {
    let t = Test::new();

    let output = t.cmd().args(["keygen", "--json"]).output().unwrap();
    assert_success(&output);

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let key = value["key"].as_str().unwrap();
    let nonce = value["nonce"].as_str().unwrap();
    assert_eq!(codec::decode(key).unwrap().len(), 32);
    assert_eq!(codec::decode(nonce).unwrap().len(), 12);
}

#[test]
fn test_keygen_save_writes_keyring() {
    let t = Test::init("staging");

    let keyring = std::fs::read_to_string(t.keyring_path()).unwrap();
    assert!(keyring.contains("[deployments.staging]"));
}

#[test]
fn test_keygen_save_refuses_overwrite() {
    let t = Test::init("staging");
    let before = std::fs::read_to_string(t.keyring_path()).unwrap();

    let output = t.keygen_save();
    assert_failure(&output);
    assert_stderr_contains(&output, "--force");
    assert_eq!(std::fs::read_to_string(t.keyring_path()).unwrap(), before);
}

#[test]
fn test_keygen_force_overwrites() {
    let t = Test::init("staging");
    let before = std::fs::read_to_string(t.keyring_path()).unwrap();

    let output = t.cmd().args(["keygen", "--save", "--force"]).output().unwrap();
    assert_success(&output);
    assert_ne!(std::fs::read_to_string(t.keyring_path()).unwrap(), before);
}

#[test]
fn test_keygen_save_requires_deployment() {
    let t = Test::new();

    let output = t.keygen_save();
    assert_failure(&output);
    assert_stderr_contains(&output, "deployment");
}

#[test]
fn test_keygen_print_ignores_provider_config() {
    let t = Test::new();
    t.write_config("[provider]\nkind = \"command\"\n");

    t.cmd()
        .args(["keygen", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""nonce""#));
}

#[test]
fn test_keygen_save_still_validates_provider_config() {
    let t = Test::new();
    t.write_config("[depseal]\ndeployment = \"staging\"\n\n[provider]\nkind = \"command\"\n");

    t.cmd()
        .args(["keygen", "--save"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("provider.command"));
}
