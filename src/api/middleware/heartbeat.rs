//! Liveness endpoint answered ahead of routing.

use axum::{
    extract::Request,
    http::{Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Path answered by the heartbeat.
pub const PING_PATH: &str = "/ping";

/// Answers `GET` and `HEAD` on `/ping` with `200 .`, passing everything
/// else through.
///
/// Sits outside logging so load balancer probes stay out of the access log.
pub async fn layer(request: Request, next: Next) -> Response {
    let is_probe = matches!(*request.method(), Method::GET | Method::HEAD)
        && request.uri().path() == PING_PATH;

    if is_probe {
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            ".",
        )
            .into_response();
    }

    next.run(request).await
}
