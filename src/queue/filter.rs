//! Monotonic filters
//!
//! A single tail-to-head scan keeps a running extreme of the values seen so
//! far; anything that breaks the ordering against that extreme is deleted.

use crate::queue::node::QueueId;
use crate::queue::store::QueueStore;
use std::cmp::Ordering;

impl QueueStore {
    /// Delete every element with a strictly smaller value somewhere after it
    ///
    /// The survivors read front to back are non-decreasing. Returns the
    /// surviving count, 0 for a stale handle or an empty queue.
    pub fn filter_ascending(&mut self, queue: QueueId) -> usize {
        self.filter_monotonic(queue, Ordering::Greater)
    }

    /// Delete every element with a strictly greater value somewhere after it
    ///
    /// The survivors read front to back are non-increasing.
    pub fn filter_descending(&mut self, queue: QueueId) -> usize {
        self.filter_monotonic(queue, Ordering::Less)
    }

    fn filter_monotonic(&mut self, queue: QueueId, violation: Ordering) -> usize {
        let Some(head) = self.queue_head(queue) else {
            return 0;
        };
        let mut extreme = self.nodes[head].prev;
        if extreme == head {
            return 0;
        }

        let mut kept = 1;
        let mut cursor = self.nodes[extreme].prev;
        while cursor != head {
            let prev = self.nodes[cursor].prev;
            if self.value(cursor).cmp(self.value(extreme)) == violation {
                self.delete(cursor);
            } else {
                extreme = cursor;
                kept += 1;
            }
            cursor = prev;
        }
        kept
    }
}
