//! Storage contract for short links.
//!
//! [`LinkStore`] is the boundary between handlers and the persistence
//! backend. Implementations live in `crate::infrastructure::persistence`;
//! mocks are generated with `mockall` for unit tests.

pub mod link_store;

pub use link_store::{LinkStore, record_access};

#[cfg(test)]
pub use link_store::MockLinkStore;
