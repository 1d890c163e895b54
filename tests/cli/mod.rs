//! CLI Integration Test Modules

pub mod configuration;
pub mod script_runs;
