//! Arena-backed store for queues, chains and their elements
//!
//! This module provides the [`QueueStore`] lifecycle and link primitives:
//! - Slot allocation with a free list and generation-checked handles
//! - Queue creation/destruction
//! - O(1) insertion and removal at either end
//! - Traversal (size, iteration, snapshots)
//!
//! The structural transforms, sorting, filters and multi-queue merge are
//! implemented as further `impl QueueStore` blocks in sibling modules.

use crate::queue::element::{copy_value_into, Element};
use crate::queue::error::{QueueError, QueueResult};
use crate::queue::node::{ChainId, Node, NodeKind, QueueId, NIL};
use std::mem;

/// Which end of a queue an operation works on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum End {
    Front,
    Back,
}

/// Owner of every queue, chain and element created through it
///
/// Queues are circular doubly-linked lists anchored by a sentinel slot.
/// A queue is empty iff its sentinel links to itself in both directions.
#[derive(Debug, Default)]
pub struct QueueStore {
    pub(crate) nodes: Vec<Node>,
    free: Vec<usize>,
}

impl QueueStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with room for `capacity` slots before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
        }
    }

    /// Number of slots currently holding a sentinel, element or chain entry
    pub fn slots_in_use(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Create an empty queue
    pub fn create(&mut self) -> QueueResult<QueueId> {
        let index = self.alloc(NodeKind::QueueHead)?;
        let id = QueueId {
            index,
            generation: self.nodes[index].generation,
        };
        log::trace!("created {}", id);
        Ok(id)
    }

    /// Free every element of the queue and the queue itself
    ///
    /// Stale handles are ignored.
    pub fn destroy(&mut self, queue: QueueId) {
        let Some(head) = self.queue_head(queue) else {
            return;
        };

        let mut cursor = self.nodes[head].next;
        while cursor != head {
            let next = self.nodes[cursor].next;
            self.release(cursor);
            cursor = next;
        }
        self.release(head);
        log::trace!("destroyed {}", queue);
    }

    /// Whether `queue` refers to a live queue in this store
    pub fn is_valid(&self, queue: QueueId) -> bool {
        self.resolve_queue(queue).is_some()
    }

    /// Insert a copy of `value` at the front of the queue
    pub fn insert_front(&mut self, queue: QueueId, value: &str) -> QueueResult<()> {
        self.insert(queue, value, End::Front)
    }

    /// Insert a copy of `value` at the back of the queue
    pub fn insert_back(&mut self, queue: QueueId, value: &str) -> QueueResult<()> {
        self.insert(queue, value, End::Back)
    }

    /// Detach the front element, optionally copying its value into `out`
    ///
    /// Returns `None` for a stale handle or an empty queue.
    pub fn remove_front(&mut self, queue: QueueId, out: Option<&mut [u8]>) -> Option<Element> {
        self.remove(queue, End::Front, out)
    }

    /// Detach the back element, optionally copying its value into `out`
    pub fn remove_back(&mut self, queue: QueueId, out: Option<&mut [u8]>) -> Option<Element> {
        self.remove(queue, End::Back, out)
    }

    /// Number of elements in the queue; 0 for a stale handle
    pub fn size(&self, queue: QueueId) -> usize {
        self.iter(queue).count()
    }

    /// Whether the queue has no elements (stale handles count as empty)
    pub fn is_empty(&self, queue: QueueId) -> bool {
        match self.resolve_queue(queue) {
            Some(head) => self.nodes[head].next == head,
            None => true,
        }
    }

    /// Iterate the queue's values front to back
    pub fn iter(&self, queue: QueueId) -> Iter<'_> {
        match self.resolve_queue(queue) {
            Some(head) => Iter {
                store: self,
                head,
                cursor: self.nodes[head].next,
            },
            None => Iter {
                store: self,
                head: NIL,
                cursor: NIL,
            },
        }
    }

    /// Snapshot of the queue's values front to back
    pub fn values(&self, queue: QueueId) -> Vec<String> {
        self.iter(queue).map(str::to_string).collect()
    }

    fn insert(&mut self, queue: QueueId, value: &str, end: End) -> QueueResult<()> {
        let head = self.require_queue(queue)?;

        let mut owned = String::new();
        owned.try_reserve_exact(value.len()).map_err(|_| {
            log::debug!("failed to duplicate {} byte value for {}", value.len(), queue);
            QueueError::AllocationFailed { bytes: value.len() }
        })?;
        owned.push_str(value);

        let node = self.alloc(NodeKind::Element(owned))?;
        match end {
            End::Front => self.link_between(node, head, self.nodes[head].next),
            End::Back => self.link_between(node, self.nodes[head].prev, head),
        }
        Ok(())
    }

    fn remove(&mut self, queue: QueueId, end: End, out: Option<&mut [u8]>) -> Option<Element> {
        let head = self.queue_head(queue)?;
        let node = match end {
            End::Front => self.nodes[head].next,
            End::Back => self.nodes[head].prev,
        };
        if node == head {
            return None;
        }

        self.unlink(node);
        let NodeKind::Element(value) = self.release(node) else {
            return None;
        };
        if let Some(out) = out {
            copy_value_into(&value, out);
        }
        Some(Element::new(value))
    }

    // ---- slot management ----

    /// Take a slot from the free list or grow the arena
    ///
    /// Capacity for the matching free-list entry is reserved up front so that
    /// releasing the slot later never allocates.
    pub(crate) fn alloc(&mut self, kind: NodeKind) -> QueueResult<usize> {
        if let Some(index) = self.free.pop() {
            let node = &mut self.nodes[index];
            node.kind = kind;
            node.next = index;
            node.prev = index;
            return Ok(index);
        }

        let index = self.nodes.len();
        let failed = |_: std::collections::TryReserveError| {
            log::debug!("arena growth failed at {} slots", index);
            QueueError::AllocationFailed {
                bytes: mem::size_of::<Node>(),
            }
        };
        self.nodes.try_reserve(1).map_err(failed)?;
        self.free
            .try_reserve((index + 1).saturating_sub(self.free.len()))
            .map_err(failed)?;
        self.nodes.push(Node::new(index, kind));
        Ok(index)
    }

    /// Return a slot to the free list, handing back what it held
    ///
    /// The slot must already be unlinked from any list.
    pub(crate) fn release(&mut self, index: usize) -> NodeKind {
        let node = &mut self.nodes[index];
        node.generation = node.generation.wrapping_add(1);
        node.next = NIL;
        node.prev = NIL;
        let kind = mem::replace(&mut node.kind, NodeKind::Vacant);
        self.free.push(index);
        kind
    }

    // ---- handle resolution ----

    pub(crate) fn resolve_queue(&self, queue: QueueId) -> Option<usize> {
        match self.nodes.get(queue.index) {
            Some(node)
                if node.generation == queue.generation
                    && matches!(node.kind, NodeKind::QueueHead) =>
            {
                Some(queue.index)
            }
            _ => None,
        }
    }

    pub(crate) fn resolve_chain(&self, chain: ChainId) -> Option<usize> {
        match self.nodes.get(chain.index) {
            Some(node)
                if node.generation == chain.generation
                    && matches!(node.kind, NodeKind::ChainHead) =>
            {
                Some(chain.index)
            }
            _ => None,
        }
    }

    /// Resolve a queue handle, logging stale handles
    pub(crate) fn queue_head(&self, queue: QueueId) -> Option<usize> {
        let head = self.resolve_queue(queue);
        if head.is_none() {
            log::debug!("ignoring stale handle {}", queue);
        }
        head
    }

    pub(crate) fn require_queue(&self, queue: QueueId) -> QueueResult<usize> {
        self.queue_head(queue).ok_or_else(|| QueueError::InvalidHandle {
            handle: queue.to_string(),
        })
    }

    // ---- link primitives ----

    /// The value stored in an element slot
    pub(crate) fn value(&self, index: usize) -> &str {
        match &self.nodes[index].kind {
            NodeKind::Element(value) => value.as_str(),
            _ => "",
        }
    }

    /// Splice a detached `node` between the adjacent `prev` and `next`
    pub(crate) fn link_between(&mut self, node: usize, prev: usize, next: usize) {
        self.nodes[node].prev = prev;
        self.nodes[node].next = next;
        self.nodes[prev].next = node;
        self.nodes[next].prev = node;
    }

    /// Remove `node` from its list, leaving it self-linked
    pub(crate) fn unlink(&mut self, node: usize) {
        let (prev, next) = (self.nodes[node].prev, self.nodes[node].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[node].next = node;
        self.nodes[node].prev = node;
    }

    /// Move `node` to directly after `anchor`
    pub(crate) fn move_after(&mut self, node: usize, anchor: usize) {
        self.unlink(node);
        let next = self.nodes[anchor].next;
        self.link_between(node, anchor, next);
    }

    /// Unlink and free an element slot
    pub(crate) fn delete(&mut self, node: usize) {
        self.unlink(node);
        self.release(node);
    }
}

/// Front-to-back iterator over a queue's values
#[derive(Debug)]
pub struct Iter<'a> {
    store: &'a QueueStore,
    head: usize,
    cursor: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.head {
            return None;
        }
        let current = self.cursor;
        self.cursor = self.store.nodes[current].next;
        Some(self.store.value(current))
    }
}
