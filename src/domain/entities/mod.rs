//! Core domain entities.
//!
//! - [`ShortLink`] - A stored key to URL mapping
//! - [`NewShortLink`] - Input for writing a new record

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink, unix_now};
