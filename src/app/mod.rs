//! Application module

pub mod cli;
pub mod harness;
pub mod startup;
