//! Validation utilities for CLI arguments and configuration values

/// Validate positive integer value
pub fn validate_positive_int(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("Value must be greater than 0".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a valid positive integer", value)),
    }
}

/// Validate a log level name
pub fn validate_log_level(value: &str) -> Result<String, String> {
    const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];
    let lowered = value.trim().to_lowercase();
    if LEVELS.contains(&lowered.as_str()) {
        Ok(lowered)
    } else {
        Err(format!(
            "'{}' is not a valid log level (expected one of: {})",
            value,
            LEVELS.join(", ")
        ))
    }
}

/// Validate a log format name
pub fn validate_log_format(value: &str) -> Result<String, String> {
    match value.trim() {
        "text" | "ext" | "json" => Ok(value.trim().to_string()),
        other => Err(format!(
            "'{}' is not a valid log format (expected text, ext or json)",
            other
        )),
    }
}
