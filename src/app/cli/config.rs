//! TOML configuration file parsing and loading
//!
//! This module handles loading and parsing of TOML configuration files,
//! including default config file discovery and validation of config values.
//! Command-line values always take precedence over the file.

use super::args::Args;
use super::validation::{validate_log_format, validate_log_level, validate_positive_int};
use crate::core::error_handling::ContextualError;
use crate::core::strings::title_case;
use std::path::{Path, PathBuf};

/// Failures while locating, reading or applying a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error parsing configuration file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        !matches!(self, ConfigError::Read { .. })
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}

impl Args {
    /// Default config location: `<config_dir>/<Title>/<command>.toml`
    pub fn default_config_path(command_name: &str) -> Option<PathBuf> {
        dirs::config_dir().map(|d| {
            d.join(title_case(command_name))
                .join(format!("{}.toml", command_name))
        })
    }

    /// Read the configuration file, if any
    ///
    /// An explicitly named file must exist; the default location is optional.
    pub fn load_config_file(
        config_file: Option<&Path>,
        command_name: &str,
    ) -> Result<Option<toml::Table>, ConfigError> {
        let config_path = match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                path.to_path_buf()
            }
            None => match Self::default_config_path(command_name) {
                Some(path) if path.exists() => path,
                _ => return Ok(None),
            },
        };

        log::debug!("loading configuration from {}", config_path.display());
        let contents =
            std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
                path: config_path.clone(),
                source,
            })?;
        let config = toml::from_str::<toml::Table>(&contents).map_err(|source| {
            ConfigError::Parse {
                path: config_path,
                source,
            }
        })?;
        Ok(Some(config))
    }

    /// Apply TOML configuration values to Args
    pub fn apply_toml_values(args: &mut Self, config: &toml::Table) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        if let Some(color) = config.get("color").and_then(|v| v.as_bool()) {
            args.color = color;
            args.no_color = !color;
        }
        if let Some(log_level) = config.get("log-level").and_then(|v| v.as_str()) {
            args.log_level = Some(validate_log_level(log_level).map_err(|e| invalid("log-level", e))?);
        }
        if let Some(log_file) = config.get("log-file").and_then(|v| v.as_str()) {
            if log_file.eq_ignore_ascii_case("none") || log_file == "-" {
                args.log_file = None; // Magic values "none" and "-" disable file logging
            } else {
                args.log_file = Some(PathBuf::from(log_file));
            }
        }
        if let Some(log_format) = config.get("log-format").and_then(|v| v.as_str()) {
            args.log_format =
                Some(validate_log_format(log_format).map_err(|e| invalid("log-format", e))?);
        }
        if let Some(descend) = config.get("descend").and_then(|v| v.as_bool()) {
            args.descend = descend;
        }
        if let Some(value) = config.get("buffer-size") {
            let size = match value {
                toml::Value::Integer(n) => validate_positive_int(&n.to_string()),
                toml::Value::String(s) => validate_positive_int(s),
                other => Err(format!("expected a positive integer, got {}", other.type_str())),
            };
            args.buffer_size = Some(size.map_err(|e| invalid("buffer-size", e))?);
        }
        if let Some(echo) = config.get("echo").and_then(|v| v.as_bool()) {
            args.echo = echo;
        }
        Ok(())
    }

    /// Resolve final settings: defaults, then config file, then command line
    pub fn resolve(cli: Args, command_name: &str) -> Result<Args, ConfigError> {
        let mut args = Args::default();
        if let Some(config) = Self::load_config_file(cli.config_file.as_deref(), command_name)? {
            Self::apply_toml_values(&mut args, &config)?;
        }
        args.merge_cli(cli);
        Ok(args)
    }
}
