//! DTOs for the list endpoint.

use serde::Serialize;

use crate::domain::entities::ShortLink;

/// Response for `GET /manage/`.
#[derive(Debug, Serialize)]
pub struct RedirectListResponse {
    pub urls: Vec<RedirectItem>,
}

/// One stored link as exposed to clients.
#[derive(Debug, Serialize)]
pub struct RedirectItem {
    pub key: String,
    pub url: String,
    pub redirect_count: i64,
}

impl From<ShortLink> for RedirectItem {
    fn from(link: ShortLink) -> Self {
        Self {
            key: link.key,
            url: link.target_url,
            redirect_count: link.access_count,
        }
    }
}
