//! HTTP middleware for request processing.
//!
//! [`apply`] wraps a router in the full stack, outermost first:
//!
//! 1. [`heartbeat`] - answers `GET|HEAD /ping` before anything else runs
//! 2. [`request_id`] - assigns `x-request-id`
//! 3. [`tracing`] - request span and access log
//! 4. [`request_id`] - copies the id onto the response
//! 5. [`client_ip`] - resolves the caller's address
//! 6. [`recovery`] - turns handler panics into 500s
//! 7. [`content_type`] - defaults `Content-Type` to JSON

pub mod client_ip;
pub mod content_type;
pub mod heartbeat;
pub mod recovery;
pub mod request_id;
pub mod tracing;

use axum::{Router, middleware};
use tower::ServiceBuilder;

pub use client_ip::ClientIp;

/// Wraps `router` in the service middleware stack.
///
/// `behind_proxy` controls whether client IPs come from forwarding headers.
pub fn apply(router: Router, behind_proxy: bool) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(heartbeat::layer))
            .layer(request_id::set_layer())
            .layer(tracing::layer())
            .layer(request_id::propagate_layer())
            .layer(middleware::from_fn_with_state(behind_proxy, client_ip::layer))
            .layer(recovery::layer())
            .layer(content_type::layer()),
    )
}
