//! Handlers for link management endpoints (create, list, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, Uri},
};
use validator::Validate;

use crate::api::dto::MessageResponse;
use crate::api::dto::create::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::api::dto::list::{RedirectItem, RedirectListResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_host::request_host;

/// Creates a short link for a target URL.
///
/// # Endpoint
///
/// `POST /manage/`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "expires_in": 3600   // optional, seconds
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{"short_url": "<host>/g/<key>"}`, where `<host>` is
/// the host the client addressed.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or fails validation.
/// Returns 500 Internal Server Error if key generation or the store fails.
pub async fn create_redirect_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    payload: Result<Json<CreateShortUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(payload.url, payload.expires_in)
        .await?;

    let host = request_host(&headers, &uri);
    let short_url = state.link_service.get_short_url(&host, &link.key);

    tracing::info!(key = %link.key, "Short link created");

    Ok((StatusCode::CREATED, Json(CreateShortUrlResponse { short_url })))
}

/// Lists every live link with its access count.
///
/// # Endpoint
///
/// `GET /manage/`
///
/// # Response
///
/// ```json
/// {
///   "urls": [
///     { "key": "aB3dE5fG7hJ9kL1m", "url": "https://example.com", "redirect_count": 4 }
///   ]
/// }
/// ```
///
/// Order is unspecified.
pub async fn list_redirects_handler(
    State(state): State<AppState>,
) -> Result<Json<RedirectListResponse>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(RedirectListResponse {
        urls: links.into_iter().map(RedirectItem::from).collect(),
    }))
}

/// Deletes a link. Unknown keys succeed as well.
///
/// # Endpoint
///
/// `DELETE /manage/{key}`
pub async fn delete_redirect_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.link_service.delete_link(&key).await?;

    tracing::info!(key = %key, "Short link deleted");

    Ok(Json(MessageResponse {
        message: "Redirect deleted successfully".to_string(),
    }))
}
