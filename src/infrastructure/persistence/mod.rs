//! Link store implementations.
//!
//! - [`MemoryLinkStore`] - process-lifetime map guarded by a single mutex

pub mod memory_link_store;

pub use memory_link_store::MemoryLinkStore;
