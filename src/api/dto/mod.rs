//! Data Transfer Objects for API requests and responses.
//!
//! DTOs use Serde for JSON serialization/deserialization.

pub mod shorten;
