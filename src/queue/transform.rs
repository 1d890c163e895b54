//! Structural transforms over a single queue
//!
//! All transforms relink existing slots; stored values are never touched.

use crate::queue::node::QueueId;
use crate::queue::store::QueueStore;

impl QueueStore {
    /// Delete the element at zero-based index `size / 2`
    ///
    /// Two cursors walk inward from both ends until they meet or become
    /// adjacent; the front cursor then names the victim. Returns `false` for
    /// a stale handle or an empty queue.
    pub fn delete_middle(&mut self, queue: QueueId) -> bool {
        let Some(head) = self.queue_head(queue) else {
            return false;
        };

        let mut front = self.nodes[head].next;
        let mut rear = self.nodes[head].prev;
        if front == head {
            return false;
        }

        while front != rear && self.nodes[rear].next != front {
            front = self.nodes[front].next;
            rear = self.nodes[rear].prev;
        }

        log::trace!("delete_middle: removing '{}' from {}", self.value(front), queue);
        self.delete(front);
        true
    }

    /// Delete every element belonging to a run of equal adjacent values
    ///
    /// Runs collapse to nothing, not to a single survivor. Expects the queue
    /// to be sorted already. Returns `false` for a stale handle or an empty
    /// queue.
    pub fn delete_adjacent_duplicates(&mut self, queue: QueueId) -> bool {
        let Some(head) = self.queue_head(queue) else {
            return false;
        };
        if self.nodes[head].next == head {
            return false;
        }

        let mut in_run = false;
        let mut cursor = self.nodes[head].next;
        while cursor != head {
            let next = self.nodes[cursor].next;
            let matches_next = next != head && self.value(cursor) == self.value(next);
            if matches_next || in_run {
                self.delete(cursor);
            }
            in_run = matches_next;
            cursor = next;
        }
        true
    }

    /// Swap every two adjacent elements
    pub fn swap_pairs(&mut self, queue: QueueId) {
        self.reverse_k_group(queue, 2);
    }

    /// Reverse the whole queue
    pub fn reverse(&mut self, queue: QueueId) {
        let Some(head) = self.queue_head(queue) else {
            return;
        };

        // Moving each element to the front in traversal order reverses the list
        let mut cursor = self.nodes[head].next;
        while cursor != head {
            let next = self.nodes[cursor].next;
            self.move_after(cursor, head);
            cursor = next;
        }
    }

    /// Reverse each consecutive run of `k` elements in place
    ///
    /// A trailing run shorter than `k` keeps its order. `k < 2` is a no-op.
    pub fn reverse_k_group(&mut self, queue: QueueId, k: usize) {
        if k < 2 {
            return;
        }
        let Some(head) = self.queue_head(queue) else {
            return;
        };

        let mut anchor = head;
        while self.has_run_after(anchor, head, k) {
            let first = self.nodes[anchor].next;
            let mut cursor = self.nodes[first].next;
            for _ in 1..k {
                let next = self.nodes[cursor].next;
                self.move_after(cursor, anchor);
                cursor = next;
            }
            // the run's first element is now its last
            anchor = first;
        }
    }

    /// Whether at least `k` elements follow `anchor` before reaching `head`
    fn has_run_after(&self, anchor: usize, head: usize, k: usize) -> bool {
        let mut probe = self.nodes[anchor].next;
        for _ in 0..k {
            if probe == head {
                return false;
            }
            probe = self.nodes[probe].next;
        }
        true
    }
}
