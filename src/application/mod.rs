//! Application layer services.
//!
//! Services orchestrate key generation, validation and storage calls and
//! give the HTTP handlers and the admin CLI one API to share.
//!
//! - [`services::link_service::LinkService`] - Short link creation and lookup

pub mod services;
