//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod links;
pub mod redirect;

pub use links::{create_redirect_handler, delete_redirect_handler, list_redirects_handler};
pub use redirect::redirect_handler;
