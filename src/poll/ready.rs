/*!
 * Readiness Queue
 * Bounded FIFO of ready events, drained in full on wait
 */

use super::types::{PollError, PollResult, ReadyEvent, MAX_READY_CAPACITY};
use std::collections::VecDeque;

/// Bounded FIFO queue of ready events
///
/// Capacity is fixed at creation and is a hard ceiling: a push against a
/// full queue is refused, never blocked on or grown past.
pub(super) struct ReadyQueue {
    capacity: usize,
    events: VecDeque<ReadyEvent>,
}

impl ReadyQueue {
    pub fn with_capacity(capacity: usize) -> PollResult<Self> {
        if capacity == 0 {
            return Err(PollError::InvalidArgument(
                "queue capacity must be positive".into(),
            ));
        }
        if capacity > MAX_READY_CAPACITY {
            return Err(PollError::AllocationFailure(format!(
                "queue capacity {} exceeds supported maximum {}",
                capacity, MAX_READY_CAPACITY
            )));
        }

        let mut events = VecDeque::new();
        events.try_reserve_exact(capacity).map_err(|e| {
            PollError::AllocationFailure(format!("failed to reserve queue storage: {}", e))
        })?;

        Ok(Self { capacity, events })
    }

    /// Append an event in arrival order. Returns false when at capacity.
    pub fn push(&mut self, event: ReadyEvent) -> bool {
        if self.events.len() >= self.capacity {
            return false;
        }
        self.events.push_back(event);
        true
    }

    pub fn is_full(&self) -> bool {
        self.events.len() >= self.capacity
    }

    /// Copy up to `max_events` entries into `buf` in FIFO order, then
    /// clear the queue entirely
    ///
    /// Entries beyond `max_events` are discarded, not retained for a
    /// later drain. Returns the number of entries copied.
    pub fn drain_into(&mut self, buf: &mut [ReadyEvent], max_events: usize) -> usize {
        let count = self.events.len().min(max_events);
        for (slot, event) in buf.iter_mut().zip(self.events.iter().take(count)) {
            *slot = *event;
        }
        self.events.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
