//! Link slots and handles for the queue arena
//!
//! Every queue, chain and element lives in a slot of a single arena owned by
//! [`QueueStore`](crate::queue::QueueStore). Slots are linked through
//! `next`/`prev` indices rather than pointers; callers only ever see the
//! generation-checked [`QueueId`] and [`ChainId`] handles.

use std::fmt;

/// Terminator for detached runs (linear, non-circular sublists)
pub(crate) const NIL: usize = usize::MAX;

/// What a slot currently holds
#[derive(Debug)]
pub(crate) enum NodeKind {
    /// Slot is on the free list
    Vacant,
    /// Sentinel of a queue; never carries a payload
    QueueHead,
    /// Sentinel of a chain of queues
    ChainHead,
    /// Stored element with its owned value
    Element(String),
    /// Chain entry referencing a queue it does not own
    ChainEntry(QueueId),
}

/// A single intrusive link slot
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) next: usize,
    pub(crate) prev: usize,
    pub(crate) generation: u32,
    pub(crate) kind: NodeKind,
}

impl Node {
    /// A fresh slot at `index`, linked to itself
    pub(crate) fn new(index: usize, kind: NodeKind) -> Self {
        Self {
            next: index,
            prev: index,
            generation: 0,
            kind,
        }
    }
}

/// Handle identifying a queue by its sentinel slot
///
/// Handles stay valid until the queue is destroyed. A handle to a destroyed
/// queue is rejected even if its slot has since been reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueueId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl fmt::Display for QueueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue#{}.{}", self.index, self.generation)
    }
}

/// Handle identifying a chain of queues by its sentinel slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chain#{}.{}", self.index, self.generation)
    }
}
