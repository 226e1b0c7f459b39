//! Tests for `satchel list` command.

mod harness;
use harness::TestEnv;
use predicates::prelude::*;

#[test]
fn test_list_shows_configured_names() {
    let env = TestEnv::new();
    env.write_config(&["app-env", "registry-auth"]);

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("app-env"))
        .stdout(predicate::str::contains("registry-auth"));
}

#[test]
fn test_list_json_output() {
    let env = TestEnv::new();
    env.write_config(&["app-env"]);

    env.cmd()
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"names\""))
        .stdout(predicate::str::contains("\"count\": 1"))
        .stdout(predicate::str::contains("\"source\": \"dir\""));
}

#[test]
fn test_list_empty() {
    let env = TestEnv::new();
    env.write_config(&[]);

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("no secrets configured"));
}

#[test]
fn test_list_without_init_fails() {
    let env = TestEnv::new();

    env.cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}
