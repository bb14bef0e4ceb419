//! Utility functions for key generation, URL validation, and request handling.
//!
//! - [`key_generator`] - Short key generation and validation
//! - [`url_validator`] - Target URL rules
//! - [`request_host`] - Host extraction from HTTP requests

pub mod key_generator;
pub mod request_host;
pub mod url_validator;
