//! In-process link store backed by a concurrent hash map.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::future;

use crate::domain::entities::{NewShortLink, ShortLink, unix_now};
use crate::domain::repositories::{LinkStore, record_access};
use crate::error::StorageError;

/// Thread-safe in-memory store mapping key -> link.
///
/// Records live as long as the process, except expired ones, which are
/// dropped the first time a lookup finds them. Used for tests and for running
/// the service without a database (`STORE_BACKEND=memory`).
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    links: DashMap<String, ShortLink>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held, expired ones included.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Bumps the counter under the entry's write guard.
    fn increment_access_count(&self, key: &str) -> Result<(), StorageError> {
        match self.links.get_mut(key) {
            Some(mut link) => {
                link.access_count += 1;
                Ok(())
            }
            None => Err(StorageError::NotFound(key.to_string())),
        }
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn get(&self, key: &str) -> Result<Option<ShortLink>, StorageError> {
        let now = unix_now();
        let snapshot = match self.links.get(key) {
            Some(link) => link.value().clone(),
            None => return Ok(None),
        };

        if snapshot.is_expired_at(now) {
            // Re-checked under the shard lock so a fresh put is not lost.
            self.links.remove_if(key, |_, link| link.is_expired_at(now));
            return Ok(None);
        }

        // The read guard is released above; a concurrent delete between the
        // two steps makes the increment fail, which is tolerated.
        record_access(key, future::ready(self.increment_access_count(key))).await;

        Ok(Some(snapshot))
    }

    async fn put(&self, new_link: NewShortLink) -> Result<(), StorageError> {
        self.links.insert(new_link.key.clone(), new_link.into());
        Ok(())
    }

    async fn put_if_absent(&self, new_link: NewShortLink) -> Result<bool, StorageError> {
        let written = match self.links.entry(new_link.key.clone()) {
            Entry::Occupied(existing) if !existing.get().is_expired_at(new_link.created_at) => {
                false
            }
            Entry::Occupied(mut expired) => {
                expired.insert(new_link.into());
                true
            }
            Entry::Vacant(slot) => {
                slot.insert(new_link.into());
                true
            }
        };

        Ok(written)
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.links.remove(key);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ShortLink>, StorageError> {
        let now = unix_now();

        Ok(self
            .links
            .iter()
            .filter(|entry| !entry.value().is_expired_at(now))
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
