//! Chains of queues and the multi-queue merge
//!
//! A chain is its own circular list in the store: a sentinel plus one entry
//! per attached queue. Entries reference queues without owning them, so
//! destroying a chain never touches the queues, and a queue destroyed while
//! still attached simply leaves a stale entry behind.

use crate::queue::error::{QueueError, QueueResult};
use crate::queue::node::{ChainId, NodeKind, QueueId, NIL};
use crate::queue::store::QueueStore;

impl QueueStore {
    /// Create an empty chain
    pub fn create_chain(&mut self) -> QueueResult<ChainId> {
        let index = self.alloc(NodeKind::ChainHead)?;
        Ok(ChainId {
            index,
            generation: self.nodes[index].generation,
        })
    }

    /// Free the chain and its entries; the referenced queues are untouched
    pub fn destroy_chain(&mut self, chain: ChainId) {
        let Some(head) = self.resolve_chain(chain) else {
            log::debug!("ignoring stale handle {}", chain);
            return;
        };

        let mut cursor = self.nodes[head].next;
        while cursor != head {
            let next = self.nodes[cursor].next;
            self.release(cursor);
            cursor = next;
        }
        self.release(head);
    }

    /// Append an entry for `queue` at the back of the chain
    pub fn chain_attach(&mut self, chain: ChainId, queue: QueueId) -> QueueResult<()> {
        let head = self.require_chain(chain)?;
        self.require_queue(queue)?;

        let entry = self.alloc(NodeKind::ChainEntry(queue))?;
        self.link_between(entry, self.nodes[head].prev, head);
        Ok(())
    }

    /// Remove the entry referencing `queue`; the queue itself is untouched
    ///
    /// Returns `false` if the chain is stale or has no such entry.
    pub fn chain_detach(&mut self, chain: ChainId, queue: QueueId) -> bool {
        let Some(head) = self.resolve_chain(chain) else {
            return false;
        };

        let mut cursor = self.nodes[head].next;
        while cursor != head {
            if matches!(self.nodes[cursor].kind, NodeKind::ChainEntry(q) if q == queue) {
                self.delete(cursor);
                return true;
            }
            cursor = self.nodes[cursor].next;
        }
        false
    }

    /// Queues referenced by the chain, in chain order
    pub fn chain_queues(&self, chain: ChainId) -> Vec<QueueId> {
        let Some(head) = self.resolve_chain(chain) else {
            return Vec::new();
        };

        let mut queues = Vec::new();
        let mut cursor = self.nodes[head].next;
        while cursor != head {
            if let NodeKind::ChainEntry(queue) = self.nodes[cursor].kind {
                queues.push(queue);
            }
            cursor = self.nodes[cursor].next;
        }
        queues
    }

    /// Number of entries in the chain, stale ones included
    pub fn chain_len(&self, chain: ChainId) -> usize {
        let Some(head) = self.resolve_chain(chain) else {
            return 0;
        };

        let mut len = 0;
        let mut cursor = self.nodes[head].next;
        while cursor != head {
            len += 1;
            cursor = self.nodes[cursor].next;
        }
        len
    }

    /// Merge every queue on the chain into the first one
    ///
    /// Each source queue must already be sorted in the requested direction.
    /// Queues are folded in chain order with the stable merge used by
    /// [`QueueStore::sort`], so equal values keep chain order. Every source
    /// other than the destination is left empty but alive. Entries whose
    /// queue was destroyed are skipped. Returns the combined size, or 0 for
    /// a stale or empty chain.
    pub fn merge_all(&mut self, chain: ChainId, descending: bool) -> usize {
        let Some(chain_head) = self.resolve_chain(chain) else {
            log::debug!("ignoring stale handle {}", chain);
            return 0;
        };

        let mut destination = None;
        let mut merged = NIL;
        let mut sources = 0;
        let mut entry = self.nodes[chain_head].next;
        while entry != chain_head {
            if let NodeKind::ChainEntry(queue) = self.nodes[entry].kind {
                if let Some(head) = self.queue_head(queue) {
                    destination.get_or_insert(head);
                    let run = self.detach_run(head);
                    merged = self.merge_runs(merged, run, descending);
                    sources += 1;
                }
            }
            entry = self.nodes[entry].next;
        }

        let Some(destination) = destination else {
            return 0;
        };
        self.attach_run(destination, merged);

        let mut size = 0;
        let mut cursor = self.nodes[destination].next;
        while cursor != destination {
            size += 1;
            cursor = self.nodes[cursor].next;
        }
        log::debug!("merged {} queues of {} into {} elements", sources, chain, size);
        size
    }

    fn require_chain(&self, chain: ChainId) -> QueueResult<usize> {
        self.resolve_chain(chain).ok_or_else(|| {
            log::debug!("ignoring stale handle {}", chain);
            QueueError::InvalidHandle {
                handle: chain.to_string(),
            }
        })
    }
}
