//! API route configuration.

use crate::api::handlers::{
    create_redirect_handler, delete_redirect_handler, list_redirects_handler, redirect_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// Public redirect route.
///
/// - `GET /g/{key}` - 302 to the stored URL
pub fn redirect_routes() -> Router<AppState> {
    Router::new().route("/g/{key}", get(redirect_handler))
}

/// Link management routes.
///
/// # Endpoints
///
/// - `GET    /manage/`      - List links with access counts
/// - `POST   /manage/`      - Create a short link
/// - `DELETE /manage/{key}` - Delete a link
///
/// `/manage` without the trailing slash is served by the same handlers.
pub fn manage_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/manage",
            get(list_redirects_handler).post(create_redirect_handler),
        )
        .route(
            "/manage/",
            get(list_redirects_handler).post(create_redirect_handler),
        )
        .route("/manage/{key}", delete(delete_redirect_handler))
}
