//! Domain layer: storage contracts independent of any concrete backing.
//!
//! - [`repositories`] - key-value store trait and its error type

pub mod repositories;
