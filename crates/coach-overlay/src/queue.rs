//! The pending-advice queue.
//!
//! Ordering contract: the highest-priority advice is always shown first;
//! among equal priorities the earliest-queued advice wins, so a burst of
//! same-priority tips displays in arrival order.

use coach_types::Advice;
use tracing::debug;

/// FIFO-on-ties priority queue of pending advice.
#[derive(Debug, Clone, Default)]
pub struct AdviceQueue {
    items: Vec<Advice>,
}

impl AdviceQueue {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add advice to the queue.
    pub fn push(&mut self, advice: Advice) {
        debug!(
            advice_id = %advice.id,
            category = advice.category.as_str(),
            priority = advice.priority,
            "advice queued"
        );
        self.items.push(advice);
    }

    /// Remove and return the next advice to show: highest priority,
    /// earliest-queued among equals.
    pub fn pop_next(&mut self) -> Option<Advice> {
        let mut best: Option<usize> = None;
        for (index, candidate) in self.items.iter().enumerate() {
            let better = match best.and_then(|b| self.items.get(b)) {
                None => true,
                // Strictly greater: the earlier entry keeps ties.
                Some(current) => candidate.priority > current.priority,
            };
            if better {
                best = Some(index);
            }
        }
        best.map(|index| self.items.remove(index))
    }

    /// Number of queued advice records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop all queued advice.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
