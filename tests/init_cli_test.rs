//! Tests for `satchel init` command.

mod harness;
use harness::{assert_failure, assert_success, stderr, TestEnv};

#[test]
fn test_init_creates_config() {
    let env = TestEnv::new();

    let output = env.init();
    assert_success(&output);

    let config_path = env.dir.path().join(".satchel.toml");
    assert!(config_path.exists());

    let contents = std::fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("kind = \"dir\""));
    assert!(contents.contains(".secrets"));
}

#[test]
fn test_init_protects_secret_dir_in_gitignore() {
    let env = TestEnv::new();

    let output = env.init();
    assert_success(&output);

    let gitignore = std::fs::read_to_string(env.dir.path().join(".gitignore")).unwrap();
    assert!(gitignore.lines().any(|l| l.trim() == ".secrets/"));
}

#[test]
fn test_init_twice_without_force_fails() {
    let env = TestEnv::new();
    assert_success(&env.init());

    // stdin is not a terminal here, so no prompt: refuse outright
    let output = env
        .cmd()
        .arg("init")
        .output()
        .expect("failed to run satchel init");

    assert_failure(&output);
    assert!(stderr(&output).contains("already initialized"));
}

#[test]
fn test_init_force_overwrites() {
    let env = TestEnv::new();
    assert_success(&env.init());

    let output = env.init();
    assert_success(&output);
}

#[test]
fn test_initialized_project_passes_config_load() {
    let env = TestEnv::new();
    assert_success(&env.init());

    // list goes through Config::load + validate
    let output = env
        .cmd()
        .arg("list")
        .output()
        .expect("failed to run satchel list");
    assert_success(&output);
}
