//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::key_generator::is_valid_key;

/// Redirects a short key to its target URL.
///
/// # Endpoint
///
/// `GET /g/{key}`
///
/// # Request Flow
///
/// 1. Reject keys that are not 16 alphanumeric characters (storage is not touched)
/// 2. Look the key up; the store counts the access
/// 3. Return 302 Found with `Location` set to the target URL
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed key.
/// Returns 404 Not Found if the key does not exist or has expired.
/// Returns 500 Internal Server Error if the store fails.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !is_valid_key(&key) {
        return Err(AppError::bad_request(
            "Invalid key format",
            json!({ "key": key }),
        ));
    }

    let link = state.link_service.resolve(&key).await?;

    let location = HeaderValue::from_str(&link.target_url).map_err(|e| {
        AppError::internal(
            format!("Stored URL is not a valid header value: {}", e),
            json!({ "key": key }),
        )
    })?;

    tracing::debug!(key = %key, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShortLink;
    use crate::domain::repositories::MockLinkStore;
    use crate::error::StorageError;
    use std::sync::Arc;

    const KEY: &str = "abcdEFGH12345678";

    fn state(store: MockLinkStore) -> AppState {
        AppState::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_malformed_key_never_reaches_store() {
        let mut store = MockLinkStore::new();
        store.expect_get().never();

        let result = redirect_handler(Path("short".to_string()), State(state(store))).await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_found_redirects_with_302() {
        let mut store = MockLinkStore::new();
        store.expect_get().times(1).returning(|key| {
            Ok(Some(ShortLink::new(
                key.to_string(),
                "https://example.com/landing".to_string(),
                0,
                0,
                None,
            )))
        });

        let response = redirect_handler(Path(KEY.to_string()), State(state(store)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com/landing"
        );
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal() {
        let mut store = MockLinkStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Err(StorageError::Decode("bad row".to_string())));

        let result = redirect_handler(Path(KEY.to_string()), State(state(store))).await;

        let err = result.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
