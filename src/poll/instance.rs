/*!
 * Poll Instance
 * Owns the interest table and readiness queue behind the public operations
 */

use super::ready::ReadyQueue;
use super::registry::InterestTable;
use super::types::{
    validate_handle, ControlOp, EventSet, PollError, PollResult, PollStats, ReadyEvent,
};
use crate::core::types::RawHandle;
use crate::monitoring::span_operation;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Facility state guarded by a single lock
///
/// The table and the queue share one mutual-exclusion discipline; nothing
/// observes one without holding the other.
struct PollInner {
    interests: InterestTable,
    ready: ReadyQueue,
    activations: u64,
    dropped_activations: u64,
    waits: u64,
    delivered: u64,
}

/// Readiness-notification instance
///
/// Owns exactly one interest table and one readiness queue for their full
/// lifetime. Cloning shares the same instance; dropping the last clone
/// releases both structures as a unit, so no operation can reach a
/// destroyed instance.
#[derive(Clone)]
pub struct PollInstance {
    inner: Arc<Mutex<PollInner>>,
}

impl PollInstance {
    /// Create an instance with the given readiness-queue capacity
    ///
    /// The capacity is fixed for the instance's lifetime. Zero is rejected
    /// with `InvalidArgument`; a capacity the queue storage cannot provide
    /// fails with `AllocationFailure`.
    pub fn with_capacity(capacity: usize) -> PollResult<Self> {
        let ready = ReadyQueue::with_capacity(capacity)?;
        debug!(capacity, "poll instance created");

        Ok(Self {
            inner: Arc::new(Mutex::new(PollInner {
                interests: InterestTable::new(),
                ready,
                activations: 0,
                dropped_activations: 0,
                waits: 0,
                delivered: 0,
            })),
        })
    }

    /// Dispatch a control operation against the registration table
    pub fn control(&self, op: ControlOp) -> PollResult<()> {
        match op {
            ControlOp::Add { handle, interest } => self.register(handle, interest),
            ControlOp::Modify { handle, interest } => self.modify(handle, interest),
            ControlOp::Delete { handle } => self.unregister(handle),
        }
    }

    /// Register interest in events on a handle
    pub fn register(&self, handle: RawHandle, interest: EventSet) -> PollResult<()> {
        let handle = validate_handle(handle)?;
        self.inner.lock().interests.insert(handle, interest)?;
        debug!(handle, interest = ?interest, "interest registered");
        Ok(())
    }

    /// Replace the interest mask of a registered handle
    ///
    /// The old mask is fully discarded, never merged.
    pub fn modify(&self, handle: RawHandle, interest: EventSet) -> PollResult<()> {
        let handle = validate_handle(handle)?;
        self.inner.lock().interests.update(handle, interest)?;
        debug!(handle, interest = ?interest, "interest modified");
        Ok(())
    }

    /// Remove a registered handle
    ///
    /// Ready events already queued for the handle stay queued; delivered
    /// notifications are not un-delivered.
    pub fn unregister(&self, handle: RawHandle) -> PollResult<()> {
        let handle = validate_handle(handle)?;
        self.inner.lock().interests.remove(handle)?;
        debug!(handle, "interest removed");
        Ok(())
    }

    /// Signal that a handle experienced the given events
    ///
    /// Fire-and-forget: a malformed handle, a full queue, an unwatched
    /// handle, or a non-matching mask all no-op silently. Each matching
    /// activation appends one independent record, up to capacity.
    pub fn activate(&self, handle: RawHandle, observed: EventSet) {
        let Ok(handle) = validate_handle(handle) else {
            trace!(handle, "activation with malformed handle ignored");
            return;
        };

        let mut inner = self.inner.lock();
        inner.activations = inner.activations.saturating_add(1);

        if inner.ready.is_full() {
            inner.dropped_activations = inner.dropped_activations.saturating_add(1);
            debug!(
                handle,
                capacity = inner.ready.capacity(),
                "readiness queue full, activation dropped"
            );
            return;
        }

        let Some(interest) = inner.interests.get(handle) else {
            trace!(handle, "activation for unwatched handle ignored");
            return;
        };

        if !interest.intersects(observed) {
            trace!(
                handle,
                observed = ?observed,
                interest = ?interest,
                "activation does not match interest"
            );
            return;
        }

        inner.ready.push(ReadyEvent {
            handle,
            events: observed,
        });
        debug!(handle, events = ?observed, ready_len = inner.ready.len(), "handle ready");
    }

    /// Drain ready events into a caller-provided buffer
    ///
    /// Copies up to `min(queue length, max_events)` events in FIFO order,
    /// then clears the queue entirely; events beyond `max_events` are
    /// discarded rather than retained for a later call. Returns the copy
    /// count; an empty queue yields 0.
    pub fn wait_into(
        &self,
        buf: &mut [ReadyEvent],
        max_events: usize,
        timeout: Option<Duration>,
    ) -> PollResult<usize> {
        if max_events == 0 {
            return Err(PollError::InvalidArgument(
                "max_events must be positive".into(),
            ));
        }
        if buf.len() < max_events {
            return Err(PollError::InvalidArgument(format!(
                "output buffer holds {} events, max_events is {}",
                buf.len(),
                max_events
            )));
        }

        // Cooperative delay, not a suspend-until-ready: the queue is
        // drained as it stands once the pause elapses.
        if let Some(delay) = timeout.filter(|d| !d.is_zero()) {
            trace!(delay_ms = delay.as_millis() as u64, "wait delaying before drain");
            std::thread::sleep(delay);
        }

        let span = span_operation("poll_wait");
        let mut inner = self.inner.lock();
        let pending = inner.ready.len();
        let count = inner.ready.drain_into(buf, max_events);
        inner.waits = inner.waits.saturating_add(1);
        inner.delivered = inner.delivered.saturating_add(count as u64);
        drop(inner);

        if pending > count {
            debug!(
                discarded = pending - count,
                "ready events beyond max_events discarded"
            );
        }
        span.record_items_processed(count);
        span.record_result(true);
        Ok(count)
    }

    /// Drain ready events into a freshly allocated buffer
    pub fn wait(
        &self,
        max_events: usize,
        timeout: Option<Duration>,
    ) -> PollResult<Vec<ReadyEvent>> {
        if max_events == 0 {
            return Err(PollError::InvalidArgument(
                "max_events must be positive".into(),
            ));
        }
        let mut buf = vec![ReadyEvent::default(); max_events];
        let count = self.wait_into(&mut buf, max_events, timeout)?;
        buf.truncate(count);
        Ok(buf)
    }

    /// Number of registered interest entries
    pub fn interest_count(&self) -> usize {
        self.inner.lock().interests.len()
    }

    /// Current readiness-queue length
    pub fn ready_len(&self) -> usize {
        self.inner.lock().ready.len()
    }

    /// Fixed readiness-queue capacity
    pub fn capacity(&self) -> usize {
        self.inner.lock().ready.capacity()
    }

    /// Point-in-time statistics snapshot
    pub fn stats(&self) -> PollStats {
        let inner = self.inner.lock();
        PollStats {
            capacity: inner.ready.capacity(),
            ready_len: inner.ready.len(),
            interest_count: inner.interests.len(),
            activations: inner.activations,
            dropped_activations: inner.dropped_activations,
            waits: inner.waits,
            delivered: inner.delivered,
        }
    }
}
