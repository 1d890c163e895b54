//! Core CLI arguments structure and basic functionality
//!
//! This module contains the Args struct definition and basic methods.
//! Configuration file loading is handled by the `config` module.

use super::validation::validate_positive_int;
use clap::Parser;
use std::path::PathBuf;

/// Buffer size used for removed values when none is configured
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

// Command-line options for the qtest driver
//
// The same structure holds the resolved settings after the configuration
// file has been merged underneath the command line.
#[derive(Parser, Debug, Clone)]
#[command(name = "qtest")]
#[command(about = "Scripted driver for the circular queue engine")]
#[command(version)]
pub struct Args {
    /// Script of queue commands (reads standard input when omitted)
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Force colored log output
    #[arg(long = "color")]
    pub color: bool,

    /// Disable colored log output
    #[arg(long = "no-color", conflicts_with = "color")]
    pub no_color: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(
        short = 'f',
        long = "log-file",
        value_name = "FILE",
        help = "Log file path (use 'none' to disable file logging)"
    )]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Sort and merge in descending order
    #[arg(short = 'd', long = "descend")]
    pub descend: bool,

    /// Sort and merge in ascending order, overriding the configuration file
    #[arg(long = "no-descend", conflicts_with = "descend")]
    pub no_descend: bool,

    /// Bytes available for each removed value, terminator included
    #[arg(short = 'b', long = "buffer-size", value_name = "BYTES", value_parser = validate_positive_int)]
    pub buffer_size: Option<usize>,

    /// Echo each script line before running it
    #[arg(short = 'e', long = "echo")]
    pub echo: bool,

    /// Do not echo script lines, overriding the configuration file
    #[arg(long = "no-echo", conflicts_with = "echo")]
    pub no_echo: bool,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay values given on the command line onto `self`
    ///
    /// Options only override when present; each flag pair overrides only
    /// when one of its flags is given.
    pub fn merge_cli(&mut self, cli: Args) {
        if cli.script.is_some() {
            self.script = cli.script;
        }
        if cli.config_file.is_some() {
            self.config_file = cli.config_file;
        }
        if cli.color {
            self.color = true;
            self.no_color = false;
        }
        if cli.no_color {
            self.no_color = true;
            self.color = false;
        }
        if cli.log_level.is_some() {
            self.log_level = cli.log_level;
        }
        if cli.log_file.is_some() {
            self.log_file = cli.log_file;
        }
        if cli.log_format.is_some() {
            self.log_format = cli.log_format;
        }
        if cli.descend {
            self.descend = true;
        }
        if cli.no_descend {
            self.descend = false;
        }
        if cli.buffer_size.is_some() {
            self.buffer_size = cli.buffer_size;
        }
        if cli.echo {
            self.echo = true;
        }
        if cli.no_echo {
            self.echo = false;
        }
    }

    /// Whether log output should be colored, falling back to TTY detection
    pub fn use_color(&self) -> bool {
        if self.no_color {
            false
        } else if self.color {
            true
        } else {
            std::io::IsTerminal::is_terminal(&std::io::stderr())
        }
    }

    /// Buffer size for removed values
    pub fn buffer_size(&self) -> usize {
        self.buffer_size.unwrap_or(DEFAULT_BUFFER_SIZE)
    }

    /// Log file path, with the magic value "none" disabling file logging
    pub fn log_file_path(&self) -> Option<String> {
        self.log_file
            .as_ref()
            .map(|path| path.to_string_lossy().to_string())
            .filter(|path| !path.eq_ignore_ascii_case("none") && path != "-")
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            script: None,
            config_file: None,
            color: false,
            no_color: false,
            log_level: None,
            log_file: None,
            log_format: Some("text".to_string()), // Default format
            descend: false,
            no_descend: false,
            buffer_size: None,
            echo: false,
            no_echo: false,
        }
    }
}
