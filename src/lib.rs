/*!
 * ReadyPoll Library
 * Readiness-based event notification facility
 */

pub mod core;
pub mod monitoring;
pub mod poll;

// Re-exports
pub use crate::core::types::{Handle, RawHandle};
pub use monitoring::init_tracing;
pub use poll::{
    ControlOp, EventSet, PollError, PollInstance, PollResult, PollStats, ReadyEvent,
};
