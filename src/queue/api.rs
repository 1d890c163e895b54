//! Public API for the queue engine
//!
//! This module provides the complete public API for the queue engine.
//! External modules should import from here rather than directly from internal modules.
//! See module documentation for complete usage examples and architecture details.

// Store and handles
pub use crate::queue::node::{ChainId, QueueId};
pub use crate::queue::store::{Iter, QueueStore};

// Detached elements and buffered copies
pub use crate::queue::element::{copy_value_into, Element};

// Error handling
pub use crate::queue::error::{QueueError, QueueResult};
