//! Intrusive Circular Queue Engine
//!
//! A circular doubly-linked list of owned string values, anchored by a
//! sentinel, with algorithmic operations layered on top of raw link
//! manipulation.
//!
//! # Overview
//!
//! - **Arena Links**: every sentinel, element and chain entry is a slot in one
//!   [`QueueStore`]; links are slot indices, never pointers
//! - **Checked Handles**: queues and chains are addressed by generation-checked
//!   handles, so a destroyed queue can never be confused with a new one
//! - **Copy-on-Insert**: values are duplicated into owned storage on insertion
//!   and handed back to the caller on removal
//! - **Structural Transforms**: reverse, k-group reverse, pair swap,
//!   delete-middle and duplicate-run collapse
//! - **Stable Sorting**: bottom-up merge sort with O(log n) auxiliary space
//! - **Monotonic Filters**: one right-to-left scan keeps a non-decreasing or
//!   non-increasing sequence
//! - **Multi-Queue Merge**: folds a chain of sorted queues into the first one
//!
//! # Architecture
//!
//! ```text
//!              QueueStore (arena of link slots)
//! ┌──────────────────────────────────────────────────────┐
//! │                                                      │
//! │  chain ──► [entry q1] ──► [entry q2] ──► (back)      │
//! │               │               │                      │
//! │               ▼               ▼                      │
//! │   q1: (head) ◄──► "a" ◄──► "c" ◄──► (head)           │
//! │   q2: (head) ◄──► "b" ◄──► "d" ◄──► (head)           │
//! │                                                      │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use queuelab::queue::QueueStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = QueueStore::new();
//! let queue = store.create()?;
//!
//! for value in ["b", "a", "d", "c"] {
//!     store.insert_back(queue, value)?;
//! }
//! store.sort(queue, false);
//! assert_eq!(store.values(queue), ["a", "b", "c", "d"]);
//!
//! let mut buf = [0u8; 16];
//! let element = store.remove_front(queue, Some(&mut buf)).unwrap();
//! assert_eq!(element.value(), "a");
//! assert_eq!(&buf[..2], b"a\0");
//!
//! store.destroy(queue);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod api;
mod chain;
mod element;
mod error;
mod filter;
mod node;
mod sort;
mod store;
mod transform;

pub use element::{copy_value_into, Element};
pub use error::{QueueError, QueueResult};
pub use node::{ChainId, QueueId};
pub use store::{Iter, QueueStore};

#[cfg(test)]
mod tests;
