//! Infrastructure layer for storage backings.
//!
//! Implements the traits defined in [`crate::domain::repositories`].
//!
//! # Modules
//!
//! - [`persistence`] - in-memory link store

pub mod persistence;
