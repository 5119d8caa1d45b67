/*!
 * Core Types
 * Common types used across the facility
 */

/// Validated handle identifying a watched resource
///
/// Handles are opaque to the facility: it never allocates or closes them.
pub type Handle = u32;

/// Caller-facing handle representation, pre-validation
///
/// Signed so that a malformed (negative) handle is expressible at the API
/// boundary and can be rejected with `InvalidHandle`.
pub type RawHandle = i64;

/// Size type for capacity bookkeeping
pub type Size = usize;
