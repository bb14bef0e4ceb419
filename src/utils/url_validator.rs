//! Target URL validation.
//!
//! A target must be an absolute `http` or `https` URL with a non-empty host.

use url::Url;

/// Reasons a target URL is rejected.
///
/// The `Display` text is returned to API clients as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetUrlError {
    #[error("url is required")]
    Missing,

    #[error("invalid url format")]
    InvalidFormat,

    #[error("url must use http or https scheme")]
    UnsupportedScheme,

    #[error("url must have a valid host")]
    MissingHost,
}

/// Validates a target URL and returns it parsed.
///
/// The raw string is what gets stored and later sent back in `Location`, so
/// it must already be in final form: whitespace and control characters are
/// rejected rather than stripped, and `http`/`https` URLs must spell out
/// their `//authority`.
///
/// # Errors
///
/// - [`TargetUrlError::Missing`] for an empty string
/// - [`TargetUrlError::InvalidFormat`] if it is not an absolute URI
/// - [`TargetUrlError::UnsupportedScheme`] for anything but http/https
/// - [`TargetUrlError::MissingHost`] if the host is empty
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target_url("https://example.com/page").is_ok());
/// assert_eq!(validate_target_url("ftp://x.com"), Err(TargetUrlError::UnsupportedScheme));
/// assert_eq!(validate_target_url("http://"), Err(TargetUrlError::MissingHost));
/// ```
pub fn validate_target_url(raw: &str) -> Result<Url, TargetUrlError> {
    if raw.is_empty() {
        return Err(TargetUrlError::Missing);
    }

    if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(TargetUrlError::InvalidFormat);
    }

    let (scheme, rest) = raw.split_once(':').ok_or(TargetUrlError::InvalidFormat)?;
    if !is_scheme(scheme) {
        return Err(TargetUrlError::InvalidFormat);
    }

    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return Err(TargetUrlError::UnsupportedScheme);
    }

    if authority_host(rest).is_none_or(str::is_empty) {
        return Err(TargetUrlError::MissingHost);
    }

    let parsed = Url::parse(raw).map_err(|_| TargetUrlError::InvalidFormat)?;

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(TargetUrlError::MissingHost);
    }

    Ok(parsed)
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Host part of `//[userinfo@]host[:port]...`, or `None` without `//`.
fn authority_host(rest: &str) -> Option<&str> {
    let after_slashes = rest.strip_prefix("//")?;
    let authority = after_slashes
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);

    let host = if host_port.starts_with('[') {
        host_port.split_inclusive(']').next().unwrap_or_default()
    } else {
        host_port.split(':').next().unwrap_or_default()
    };

    Some(host)
}
