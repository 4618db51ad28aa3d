//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod redirect;
pub mod shorten;

pub use fallback::fallback_handler;
pub use redirect::redirect_handler;
pub use shorten::{create_short_link_handler, shorten_handler};
