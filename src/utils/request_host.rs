//! Host extraction for building short URLs.

use axum::http::{HeaderMap, Uri, header};

/// Host used when a request carries neither a `Host` header nor an authority.
const FALLBACK_HOST: &str = "localhost";

/// Returns the host the client addressed, including any port.
///
/// Prefers the `Host` header (HTTP/1.1), then the URI authority (HTTP/2).
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// assert_eq!(request_host(&headers, &Uri::from_static("/manage/")), "sho.rt:8080");
/// ```
pub fn request_host(headers: &HeaderMap, uri: &Uri) -> String {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .or_else(|| uri.authority().map(|a| a.to_string()))
        .unwrap_or_else(|| FALLBACK_HOST.to_string())
}
