//! HTTP middleware for request processing.
//!
//! Provides observability middleware: request spans and the access log.

pub mod access_log;
pub mod tracing;
