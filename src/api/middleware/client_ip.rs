//! Client IP resolution.

use axum::{
    extract::{ConnectInfo, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::net::{IpAddr, SocketAddr};

/// Resolved address of the caller, stored as a request extension.
///
/// `None` when neither forwarding headers nor the peer address are available
/// (e.g. in-process test clients).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIp(pub Option<IpAddr>);

/// Resolves the client IP and records it on the request span.
///
/// With `behind_proxy` set, the first `X-Forwarded-For` entry wins, then
/// `X-Real-IP`; otherwise only the socket peer address is trusted.
pub async fn layer(
    State(behind_proxy): State<bool>,
    mut request: Request,
    next: Next,
) -> Response {
    let forwarded = if behind_proxy {
        forwarded_ip(request.headers())
    } else {
        None
    };

    let ip = forwarded.or_else(|| {
        request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip())
    });

    if let Some(ip) = ip {
        tracing::Span::current().record("client_ip", tracing::field::display(ip));
    }

    request.extensions_mut().insert(ClientIp(ip));
    next.run(request).await
}

/// Reads the client address from proxy headers.
pub fn forwarded_ip(headers: &HeaderMap) -> Option<IpAddr> {
    let from_forwarded_for = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|v| v.trim().parse().ok());

    from_forwarded_for.or_else(|| {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
    })
}
