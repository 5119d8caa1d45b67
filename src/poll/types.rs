/*!
 * Poll Types
 * Common types for the readiness-notification facility
 */

use crate::core::serde::{is_zero_u64, is_zero_usize};
use crate::core::types::{Handle, RawHandle, Size};
use bitflags::bitflags;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum readiness-queue capacity an instance can be created with
pub const MAX_READY_CAPACITY: usize = 65_536;

/// Poll operation result
///
/// # Must Use
/// Control and wait operations can fail and must be handled
pub type PollResult<T> = Result<T, PollError>;

/// Unified poll error type with miette diagnostics
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum PollError {
    /// Malformed handle passed to a control operation
    #[error("invalid handle: {0}")]
    #[diagnostic(
        code(poll::invalid_handle),
        help("Handles are non-negative integers within the u32 range.")
    )]
    InvalidHandle(RawHandle),

    /// Add on a handle that is already registered
    #[error("handle {0} is already registered")]
    #[diagnostic(
        code(poll::duplicate_handle),
        help("Each handle has at most one interest entry. Use Modify to change its mask.")
    )]
    DuplicateHandle(Handle),

    /// Modify or Delete on a handle with no interest entry
    #[error("handle {0} is not registered")]
    #[diagnostic(
        code(poll::unknown_handle),
        help("Register the handle with Add before modifying or deleting it.")
    )]
    UnknownHandle(Handle),

    /// Invalid capacity, max_events, or output buffer
    #[error("invalid argument: {0}")]
    #[diagnostic(
        code(poll::invalid_argument),
        help("Capacity and max_events must be positive; output buffers must hold at least max_events entries.")
    )]
    InvalidArgument(String),

    /// Resource exhaustion at instance creation
    #[error("allocation failure: {0}")]
    #[diagnostic(
        code(poll::allocation_failure),
        help("Reduce the requested capacity or free memory.")
    )]
    AllocationFailure(String),
}

bitflags! {
    /// Readiness conditions a caller can watch for on a handle
    ///
    /// Masks combine with bitwise OR and are tested with AND-nonzero.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct EventSet: u32 {
        /// There is data to be read.
        const READABLE = 0x1;
        /// Writing is now possible.
        const WRITABLE = 0x2;
        /// Error condition on the handle.
        const ERROR    = 0x4;
        /// The peer hung up.
        const HANGUP   = 0x8;
    }
}

/// A control operation against the registration table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum ControlOp {
    /// Register interest in events on a new handle
    Add {
        handle: RawHandle,
        interest: EventSet,
    },
    /// Replace the interest mask of a registered handle
    Modify {
        handle: RawHandle,
        interest: EventSet,
    },
    /// Remove a registered handle
    Delete { handle: RawHandle },
}

/// A drained readiness notification
///
/// Transient: produced by an activation, consumed and discarded by the
/// wait call that drains it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyEvent {
    pub handle: Handle,
    /// Events the activation source observed on the handle
    pub events: EventSet,
}

/// Point-in-time facility statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PollStats {
    pub capacity: Size,
    #[serde(skip_serializing_if = "is_zero_usize")]
    pub ready_len: Size,
    #[serde(skip_serializing_if = "is_zero_usize")]
    pub interest_count: Size,
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub activations: u64,
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub dropped_activations: u64,
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub waits: u64,
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub delivered: u64,
}

/// Validate a caller-supplied raw handle
pub fn validate_handle(raw: RawHandle) -> PollResult<Handle> {
    if raw < 0 || raw > RawHandle::from(Handle::MAX) {
        return Err(PollError::InvalidHandle(raw));
    }
    Ok(raw as Handle)
}
