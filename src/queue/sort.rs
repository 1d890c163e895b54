//! Stable merge sort over a queue
//!
//! The queue is cut open into a NIL-terminated run linked through `next`
//! only, sorted bottom-up with a binary counter of pending runs, then closed
//! back into a circle with `prev` links rebuilt. The pending stack holds at
//! most one run per power of two, so auxiliary space is O(log n).
//!
//! Descending order flips the comparison inside the merge. Equal values keep
//! their original relative order in both directions.

use crate::queue::node::{QueueId, NIL};
use crate::queue::store::QueueStore;

impl QueueStore {
    /// Sort the queue by value, ascending or descending
    pub fn sort(&mut self, queue: QueueId, descending: bool) {
        let Some(head) = self.queue_head(queue) else {
            return;
        };
        // empty or single element
        if self.nodes[head].next == self.nodes[head].prev {
            return;
        }

        let mut cursor = self.detach_run(head);
        let mut pending: Vec<usize> = Vec::with_capacity(usize::BITS as usize);
        while cursor != NIL {
            let next = self.nodes[cursor].next;
            self.nodes[cursor].next = NIL;

            let mut run = cursor;
            let mut level = 0;
            while level < pending.len() && pending[level] != NIL {
                run = self.merge_runs(pending[level], run, descending);
                pending[level] = NIL;
                level += 1;
            }
            if level == pending.len() {
                pending.push(run);
            } else {
                pending[level] = run;
            }
            cursor = next;
        }

        // Higher levels hold earlier elements, so they merge in on the left
        let mut sorted = NIL;
        for &run in &pending {
            if run != NIL {
                sorted = self.merge_runs(run, sorted, descending);
            }
        }
        self.attach_run(head, sorted);
        log::trace!("sorted {} (descending: {})", queue, descending);
    }

    /// Stable merge of two sorted runs; `left` wins ties
    pub(crate) fn merge_runs(&mut self, left: usize, right: usize, descending: bool) -> usize {
        let (mut left, mut right) = (left, right);
        let mut first = NIL;
        let mut last = NIL;

        while left != NIL && right != NIL {
            let take = if self.precedes(right, left, descending) {
                let taken = right;
                right = self.nodes[right].next;
                taken
            } else {
                let taken = left;
                left = self.nodes[left].next;
                taken
            };
            if last == NIL {
                first = take;
            } else {
                self.nodes[last].next = take;
            }
            last = take;
        }

        let rest = if left != NIL { left } else { right };
        if last == NIL {
            rest
        } else {
            self.nodes[last].next = rest;
            first
        }
    }

    /// Whether `a` must be placed strictly before `b`
    fn precedes(&self, a: usize, b: usize, descending: bool) -> bool {
        if descending {
            self.value(a) > self.value(b)
        } else {
            self.value(a) < self.value(b)
        }
    }

    /// Cut every element out of the queue as a NIL-terminated run
    ///
    /// The queue is left empty. Returns `NIL` if it was already empty.
    pub(crate) fn detach_run(&mut self, head: usize) -> usize {
        let first = self.nodes[head].next;
        if first == head {
            return NIL;
        }
        let last = self.nodes[head].prev;
        self.nodes[last].next = NIL;
        self.nodes[head].next = head;
        self.nodes[head].prev = head;
        first
    }

    /// Append a NIL-terminated run to the back of the queue, fixing `prev` links
    pub(crate) fn attach_run(&mut self, head: usize, run: usize) {
        let mut tail = self.nodes[head].prev;
        let mut cursor = run;
        while cursor != NIL {
            let next = self.nodes[cursor].next;
            self.nodes[tail].next = cursor;
            self.nodes[cursor].prev = tail;
            tail = cursor;
            cursor = next;
        }
        self.nodes[tail].next = head;
        self.nodes[head].prev = tail;
    }
}
