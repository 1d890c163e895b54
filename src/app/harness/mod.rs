//! Script harness exercising the queue engine
//!
//! Reads one command per line, applies it to the current queue and prints
//! the resulting queue, counting every line that fails.

pub mod command;
pub mod error;
pub mod interpreter;

pub use command::Command;
pub use error::{HarnessError, HarnessResult};
pub use interpreter::{Flow, Harness, HarnessSettings};
