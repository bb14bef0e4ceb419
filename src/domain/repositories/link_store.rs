//! Storage trait for short link data access.

use std::future::Future;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::StorageError;
use async_trait::async_trait;

/// Key-value storage for short links, keyed by the short key.
///
/// Calls are cancelled by dropping the returned future, so a disconnected
/// client or a shutting-down server stops in-flight work.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Looks up a link and counts the access.
    ///
    /// On a hit the stored `access_count` is incremented by one. A failed
    /// increment is logged and ignored; the record is still returned with
    /// its pre-increment count.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(link))` if found and not expired
    /// - `Ok(None)` if missing or expired
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the lookup itself fails.
    async fn get(&self, key: &str) -> Result<Option<ShortLink>, StorageError>;

    /// Writes a link with `access_count = 0`, replacing any record under the
    /// same key.
    async fn put(&self, new_link: NewShortLink) -> Result<(), StorageError>;

    /// Writes a link only if the key is free.
    ///
    /// An expired record does not hold its key. Returns `Ok(false)` when a
    /// live record already uses the key.
    async fn put_if_absent(&self, new_link: NewShortLink) -> Result<bool, StorageError>;

    /// Removes a link. Deleting a missing key succeeds.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Returns every live link, in no particular order.
    ///
    /// Records that cannot be decoded are skipped.
    async fn list(&self) -> Result<Vec<ShortLink>, StorageError>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}

/// Runs an access-count increment for `key`, logging and discarding failure.
pub async fn record_access<F>(key: &str, increment: F)
where
    F: Future<Output = Result<(), StorageError>>,
{
    if let Err(e) = increment.await {
        tracing::debug!(key, error = %e, "Failed to increment access count");
    }
}
