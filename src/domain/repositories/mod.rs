//! Storage trait definitions for the domain layer.
//!
//! The traits here describe what the application needs from storage; concrete
//! backings live in `crate::infrastructure::persistence`. Mock implementations
//! are generated via `mockall` for unit tests.

pub mod link_store;

pub use link_store::{LinkStore, StoreError};

#[cfg(test)]
pub use link_store::MockLinkStore;
