//! Application layer services.
//!
//! Services orchestrate code derivation and storage and give HTTP handlers a
//! small API to call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - short link creation and resolution

pub mod services;
