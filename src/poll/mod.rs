/*!
 * Poll Module
 * Readiness-based event notification: interest registry, bounded
 * readiness queue, and the instance that bundles them
 */

pub mod instance;
pub mod ready;
pub mod registry;
pub mod types;

// Re-export public API
pub use instance::PollInstance;
pub use types::{
    ControlOp, EventSet, PollError, PollResult, PollStats, ReadyEvent, MAX_READY_CAPACITY,
};
