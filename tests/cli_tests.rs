//! CLI argument parsing integration tests

use std::process::Command;

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute cargo run")
}

#[test]
fn test_cli_without_arguments_fails() {
    let output = run_cli(&[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No given arguments"));
}

#[test]
fn test_cli_version() {
    let output = run_cli(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("gitp"));
}

#[test]
fn test_cli_missing_config_file() {
    let output = run_cli(&["--config", "nonexistent-gitp.yaml", "status"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"));
}

#[test]
fn test_cli_undo_usage_error() {
    let output = run_cli(&["undo", "bogus"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: undo"));
}

#[test]
fn test_cli_terminal_rejects_unknown_flag() {
    let output = run_cli(&["terminal", "--bogus"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: terminal [--keep-alive]"));
}
