//! Domain layer: the short link entity and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - The [`repositories::LinkStore`] trait implemented by
//!   `crate::infrastructure::persistence`
//!
//! The domain layer has no dependency on HTTP or on a concrete backend.

pub mod entities;
pub mod repositories;
