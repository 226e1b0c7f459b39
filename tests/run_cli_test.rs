//! Tests for `satchel run` command.

mod harness;
use harness::{assert_failure, assert_success, stderr, stdout, TestEnv};

#[test]
fn test_run_exposes_secret_file_to_child() {
    let env = TestEnv::new();
    env.write_config(&["app-env"]);
    env.add_secret("app-env", "KEY=value\n");

    #[cfg(unix)]
    {
        let output = env.run(&["sh", "-c", "cat \"$SATCHEL_SECRET_FILES\""]);
        assert_success(&output);
        assert!(stdout(&output).contains("KEY=value"));
    }

    #[cfg(windows)]
    {
        let output = env.run(&["cmd", "/c", "type %SATCHEL_SECRET_FILES%"]);
        assert_success(&output);
        assert!(stdout(&output).contains("KEY=value"));
    }
}

#[cfg(unix)]
#[test]
fn test_run_joins_multiple_paths_in_request_order() {
    let env = TestEnv::new();
    env.write_config(&[]);
    env.add_secret("first", "1st\n");
    env.add_secret("second", "2nd\n");

    let output = env
        .cmd()
        .args(["run", "--secret", "second", "--secret", "first", "--"])
        .args(["sh", "-c", "IFS=,; for f in $SATCHEL_SECRET_FILES; do cat \"$f\"; done"])
        .output()
        .expect("failed to run satchel run");

    assert_success(&output);
    assert_eq!(stdout(&output), "2nd\n1st\n");
}

#[test]
fn test_run_cleans_scratch_directory() {
    let env = TestEnv::new();
    env.write_config(&["app-env"]);
    env.add_secret("app-env", "KEY=value\n");

    #[cfg(unix)]
    let output = env.run(&["sh", "-c", "test -s \"$SATCHEL_SECRET_FILES\""]);
    #[cfg(windows)]
    let output = env.run(&["cmd", "/c", "exit 0"]);

    assert_success(&output);
    assert!(
        env.scratch_files().is_empty(),
        "scratch directory not empty: {:?}",
        env.scratch_files()
    );
}

#[test]
fn test_run_command_exit_code_passthrough() {
    let env = TestEnv::new();
    env.write_config(&["app-env"]);
    env.add_secret("app-env", "KEY=value\n");

    #[cfg(unix)]
    let output = env.run(&["sh", "-c", "exit 42"]);
    #[cfg(windows)]
    let output = env.run(&["cmd", "/c", "exit 42"]);

    assert_eq!(output.status.code(), Some(42));
    assert!(env.scratch_files().is_empty());
}

#[test]
fn test_run_failing_command_still_cleans_scratch() {
    let env = TestEnv::new();
    env.write_config(&["app-env"]);
    env.add_secret("app-env", "KEY=value\n");

    #[cfg(unix)]
    let output = env.run(&["sh", "-c", "exit 1"]);
    #[cfg(windows)]
    let output = env.run(&["cmd", "/c", "exit 1"]);

    assert_failure(&output);
    assert!(env.scratch_files().is_empty());
}

#[test]
fn test_run_missing_secret_fails_before_spawning() {
    let env = TestEnv::new();
    env.write_config(&[]);
    env.add_secret("present", "x\n");

    // A marker file would appear if the command ever ran
    let marker = env.dir.path().join("ran");

    #[cfg(unix)]
    let output = env
        .cmd()
        .args(["run", "--secret", "present", "--secret", "absent", "--"])
        .args(["sh", "-c", &format!("touch {}", marker.display())])
        .output()
        .expect("failed to run satchel run");
    #[cfg(windows)]
    let output = env
        .cmd()
        .args(["run", "--secret", "present", "--secret", "absent", "--"])
        .args(["cmd", "/c", &format!("type nul > {}", marker.display())])
        .output()
        .expect("failed to run satchel run");

    assert_failure(&output);
    assert!(stderr(&output).contains("secret not found: absent"));
    assert!(!marker.exists());
    assert!(env.scratch_files().is_empty());
}

#[test]
fn test_run_empty_secret_rejected() {
    let env = TestEnv::new();
    env.write_config(&["blank"]);
    env.add_secret("blank", "   \n");

    #[cfg(unix)]
    let output = env.run(&["sh", "-c", "exit 0"]);
    #[cfg(windows)]
    let output = env.run(&["cmd", "/c", "exit 0"]);

    assert_failure(&output);
    assert!(stderr(&output).contains("resolved to an empty value"));
    assert!(env.scratch_files().is_empty());
}

#[test]
fn test_run_with_no_configured_secrets_fails() {
    let env = TestEnv::new();
    env.write_config(&[]);

    #[cfg(unix)]
    let output = env.run(&["sh", "-c", "exit 0"]);
    #[cfg(windows)]
    let output = env.run(&["cmd", "/c", "exit 0"]);

    assert_failure(&output);
    assert!(stderr(&output).contains("no secrets requested"));
}

#[test]
fn test_run_without_init_fails() {
    let env = TestEnv::new();

    #[cfg(unix)]
    let output = env.run(&["echo", "test"]);
    #[cfg(windows)]
    let output = env.run(&["cmd", "/c", "echo test"]);

    assert_failure(&output);
    assert!(stderr(&output).contains("not initialized"));
}
