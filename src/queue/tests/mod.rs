//! Test modules for the queue engine
//!
//! Tests are organized by functional area for better maintainability.

mod transforms;

use crate::queue::api::{QueueId, QueueStore};

/// Build a queue holding `values` in order
pub(super) fn queue_of(store: &mut QueueStore, values: &[&str]) -> QueueId {
    let queue = store.create().unwrap();
    for value in values {
        store.insert_back(queue, value).unwrap();
    }
    queue
}

/// Slot indices of the queue's elements front to back
///
/// Equal values are only distinguishable by slot, so stability checks
/// compare these before and after an operation.
pub(super) fn slot_order(store: &QueueStore, queue: QueueId) -> Vec<usize> {
    let Some(head) = store.resolve_queue(queue) else {
        return Vec::new();
    };
    let mut slots = Vec::new();
    let mut cursor = store.nodes[head].next;
    while cursor != head {
        slots.push(cursor);
        cursor = store.nodes[cursor].next;
    }
    slots
}
