//! Link creation, lookup and removal service.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::key_generator::{generate_key, is_valid_key};
use crate::utils::url_validator::validate_target_url;
use serde_json::json;

/// Attempts at finding a free key before giving up.
const MAX_KEY_ATTEMPTS: usize = 5;

/// Service for creating and resolving short links.
///
/// Sits between the HTTP handlers (and the admin CLI) and the
/// [`LinkStore`]; nothing else touches the store directly.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Creates a short link under a freshly generated key.
    ///
    /// # Arguments
    ///
    /// - `target_url` - The URL to redirect to (http/https with a host)
    /// - `expires_in` - Optional lifetime in seconds; `0` means no expiry
    ///
    /// # Key Collisions
    ///
    /// The record is written with [`LinkStore::put_if_absent`]. If the key is
    /// taken a new one is generated, up to 5 attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is invalid or `expires_in`
    /// is negative.
    ///
    /// Returns [`AppError::Internal`] if key generation fails, the store
    /// fails, or every attempted key collides.
    pub async fn create_short_link(
        &self,
        target_url: String,
        expires_in: Option<i64>,
    ) -> Result<ShortLink, AppError> {
        validate_target_url(&target_url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "url": target_url }))
        })?;

        if let Some(secs) = expires_in
            && secs < 0
        {
            return Err(AppError::bad_request(
                "expires_in must not be negative",
                json!({ "expires_in": secs }),
            ));
        }

        for attempt in 1..=MAX_KEY_ATTEMPTS {
            let key = generate_key()?;
            let new_link = NewShortLink::new(key, target_url.clone(), expires_in);

            if self.store.put_if_absent(new_link.clone()).await? {
                tracing::debug!(key = %new_link.key, attempt, "Short link created");
                return Ok(new_link.into());
            }

            tracing::warn!(key = %new_link.key, attempt, "Generated key already in use");
        }

        Err(AppError::internal(
            "Failed to generate unique key",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Writes a link under a caller-chosen key, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed key or URL.
    pub async fn set_link(&self, key: &str, target_url: String) -> Result<ShortLink, AppError> {
        if !is_valid_key(key) {
            return Err(AppError::bad_request(
                "Invalid key format",
                json!({ "key": key }),
            ));
        }

        validate_target_url(&target_url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "url": target_url }))
        })?;

        let new_link = NewShortLink::new(key.to_string(), target_url, None);
        self.store.put(new_link.clone()).await?;

        Ok(new_link.into())
    }

    /// Resolves a key to its link, counting the access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live link uses the key.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, key: &str) -> Result<ShortLink, AppError> {
        self.store
            .get(key)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "key": key })))
    }

    /// Returns every live link.
    pub async fn list_links(&self) -> Result<Vec<ShortLink>, AppError> {
        Ok(self.store.list().await?)
    }

    /// Deletes a link. Missing keys are not an error.
    pub async fn delete_link(&self, key: &str) -> Result<(), AppError> {
        self.store.delete(key).await?;
        Ok(())
    }

    /// Checks if the backing store is reachable.
    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }

    /// Constructs the short URL for a key as `<host>/g/<key>`.
    pub fn get_short_url(&self, host: &str, key: &str) -> String {
        format!("{}/g/{}", host.trim_end_matches('/'), key)
    }
}
