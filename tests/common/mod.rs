//! Common test utilities and helpers
//!
//! Runs the `qtest` binary against scripts written into a temporary
//! directory, always with an explicit configuration file so the user's own
//! configuration never leaks into a test.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Scratch directory holding a script and a configuration file
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let workspace = Self { dir };
        workspace.write_config("");
        workspace
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("qtest.toml")
    }

    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.config_path(), contents).expect("write config");
    }

    pub fn write_script(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("script.cmd");
        std::fs::write(&path, contents).expect("write script");
        path
    }

    /// Run `qtest -c <config> <extra args...> <script>`
    pub fn run(&self, script: &str, extra_args: &[&str]) -> Output {
        let script_path = self.write_script(script);
        Command::new(env!("CARGO_BIN_EXE_qtest"))
            .arg("-c")
            .arg(self.config_path())
            .args(extra_args)
            .arg(script_path)
            .output()
            .expect("run qtest")
    }
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
