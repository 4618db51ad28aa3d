//! HTTP API layer.
//!
//! Translates HTTP requests into service calls and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - JSON request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request spans and access logging
//! - [`routes`] - `/api` route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
