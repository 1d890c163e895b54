//! Script execution tests
//!
//! Runs complete scripts through the binary and checks the printed queue
//! states and the exit status.

use crate::common::{stdout_lines, Workspace};
use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn test_successful_script_exits_zero() {
    let workspace = Workspace::new();
    let output = workspace.run("new\nit b\nit a\nit c\nsort\nsize\nfree\n", &[]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout_lines(&output),
        [
            "l = []",
            "l = [b]",
            "l = [b a]",
            "l = [b a c]",
            "l = [a b c]",
            "Queue size = 3",
            "l = NULL",
        ]
    );
}

#[test]
fn test_failed_line_sets_exit_code() {
    let workspace = Workspace::new();
    let output = workspace.run("new\nit a\nrh b\nit c\n", &[]);

    assert_eq!(output.status.code(), Some(1));
    let lines = stdout_lines(&output);
    assert!(lines.contains(&"ERROR: Removed value a != expected value b".to_string()));
    // the script keeps going after a failure
    assert_eq!(lines.last().map(String::as_str), Some("l = [c]"));
}

#[test]
fn test_merge_scenario() {
    let workspace = Workspace::new();
    let script = "\
new
it 1
it 4
new
it 2
it 5
new
it 3
merge
rh 1
rt 5
";
    let output = workspace.run(script, &[]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(lines.contains(&"Merged into 5 elements".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("l = [2 3 4]"));
}

#[test]
fn test_descend_flag() {
    let workspace = Workspace::new();
    let output = workspace.run("new\nit a\nit c\nit b\nsort\n", &["--descend"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output).last().map(String::as_str),
        Some("l = [c b a]")
    );
}

#[test]
fn test_echo_flag() {
    let workspace = Workspace::new();
    let output = workspace.run("new\nquit\n", &["-e"]);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["cmd> new", "l = []", "cmd> quit"]);
}

#[test]
fn test_script_from_stdin() {
    let workspace = Workspace::new();
    let mut child = Command::new(env!("CARGO_BIN_EXE_qtest"))
        .arg("-c")
        .arg(workspace.config_path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"new\nih x\nih y\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output).last().map(String::as_str),
        Some("l = [y x]")
    );
}

#[test]
fn test_missing_script_file_fails() {
    let workspace = Workspace::new();
    let output = Command::new(env!("CARGO_BIN_EXE_qtest"))
        .arg("-c")
        .arg(workspace.config_path())
        .arg(workspace.config_path().with_file_name("no-such-script.cmd"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
