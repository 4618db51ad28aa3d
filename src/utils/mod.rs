//! Helpers used by the service and handlers.
//!
//! - [`code_generator`] - deterministic short code derivation
//! - [`url_validator`] - syntactic URL checks

pub mod code_generator;
pub mod url_validator;
