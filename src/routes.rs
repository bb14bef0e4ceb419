//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET|HEAD /ping`     - Heartbeat (answered by middleware)
//! - `GET  /g/{key}`      - Short link redirect
//! - `/manage/*`          - Link management
//!
//! # Middleware
//!
//! See [`api::middleware`] for the stack and its order.

use crate::api;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, the client IP is read from
///   `X-Forwarded-For` / `X-Real-IP` instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> Router {
    let router = Router::new()
        .merge(api::routes::redirect_routes())
        .merge(api::routes::manage_routes())
        .with_state(state);

    api::middleware::apply(router, behind_proxy)
}
