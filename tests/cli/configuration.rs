//! Configuration file tests
//!
//! Checks that configuration values reach the harness and that the command
//! line wins over the file.

use crate::common::{stdout_lines, Workspace};
use std::process::Command;

#[test]
fn test_config_buffer_size_truncates_removals() {
    let workspace = Workspace::new();
    workspace.write_config("buffer-size = 3\n");
    let output = workspace.run("new\nit hello\nrh he\n", &[]);

    assert!(output.status.success(), "stdout: {:?}", stdout_lines(&output));
    assert!(stdout_lines(&output).contains(&"Removed he from queue".to_string()));
}

#[test]
fn test_cli_buffer_size_overrides_config() {
    let workspace = Workspace::new();
    workspace.write_config("buffer-size = 3\n");
    let output = workspace.run("new\nit hello\nrh hello\n", &["--buffer-size", "64"]);

    assert!(output.status.success());
    assert!(stdout_lines(&output).contains(&"Removed hello from queue".to_string()));
}

#[test]
fn test_config_descend() {
    let workspace = Workspace::new();
    workspace.write_config("descend = true\n");
    let output = workspace.run("new\nit 1\nit 3\nit 2\nsort\n", &[]);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output).last().map(String::as_str),
        Some("l = [3 2 1]")
    );
}

#[test]
fn test_cli_no_descend_overrides_config() {
    let workspace = Workspace::new();
    workspace.write_config("descend = true\n");
    let output = workspace.run("new\nit 1\nit 3\nit 2\nsort\n", &["--no-descend"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output).last().map(String::as_str),
        Some("l = [1 2 3]")
    );
}

#[test]
fn test_invalid_config_value_exits_with_config_error() {
    let workspace = Workspace::new();
    workspace.write_config("log-level = \"loud\"\n");
    let output = workspace.run("new\n", &[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("log-level"));
}

#[test]
fn test_malformed_config_exits_with_config_error() {
    let workspace = Workspace::new();
    workspace.write_config("buffer-size = [\n");
    let output = workspace.run("new\n", &[]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_missing_explicit_config_file() {
    let workspace = Workspace::new();
    let output = Command::new(env!("CARGO_BIN_EXE_qtest"))
        .arg("-c")
        .arg(workspace.config_path().with_file_name("missing.toml"))
        .arg(workspace.write_script("new\n"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}
