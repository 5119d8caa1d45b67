/*!
 * Monitoring Module
 * Tracing bootstrap and operation instrumentation
 */

pub mod tracer;

pub use tracer::{generate_trace_id, init_tracing, span_operation, OperationSpan};
