//! HTTP middleware for request processing.
//!
//! Authentication is handled upstream; this service only adds observability.

pub mod tracing;
