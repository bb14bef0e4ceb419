//! DTOs for the create endpoint.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::utils::url_validator::validate_target_url;

/// Request body for `POST /manage/`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortUrlRequest {
    /// Absolute http(s) URL to redirect to. A missing field reads as empty
    /// so it fails with the same message as `""`.
    #[serde(default)]
    #[validate(custom(function = "check_target_url"))]
    pub url: String,

    /// Lifetime in seconds; absent or `0` means the link never expires.
    #[validate(range(min = 0, message = "expires_in must not be negative"))]
    pub expires_in: Option<i64>,
}

/// Response for a created link.
#[derive(Debug, Serialize)]
pub struct CreateShortUrlResponse {
    pub short_url: String,
}

fn check_target_url(url: &str) -> Result<(), ValidationError> {
    validate_target_url(url)
        .map(|_| ())
        .map_err(|e| ValidationError::new("target_url").with_message(Cow::Owned(e.to_string())))
}
