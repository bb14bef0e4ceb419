//! Short link entity representing a key to URL mapping.

use chrono::Utc;

/// Current time as a Unix timestamp in seconds.
pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}

/// A shortened URL record.
///
/// `key` and `target_url` never change after creation; `access_count` only
/// grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub key: String,
    pub target_url: String,
    pub access_count: i64,
    pub created_at: i64,
    pub expires_at: Option<i64>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        key: String,
        target_url: String,
        access_count: i64,
        created_at: i64,
        expires_at: Option<i64>,
    ) -> Self {
        Self {
            key,
            target_url,
            access_count,
            created_at,
            expires_at,
        }
    }

    /// Returns true if the link has an expiry at or before `now`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|e| now >= e)
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(unix_now())
    }
}

/// Input data for writing a new link.
///
/// `created_at` is captured when the value is built so the expiry can be
/// derived from the same instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub key: String,
    pub target_url: String,
    pub created_at: i64,
    pub expires_at: Option<i64>,
}

impl NewShortLink {
    /// Builds a record stamped with the current time.
    ///
    /// A positive `expires_in` (seconds) sets `expires_at`; zero or `None`
    /// means the link never expires.
    pub fn new(key: String, target_url: String, expires_in: Option<i64>) -> Self {
        let created_at = unix_now();
        let expires_at = expires_in
            .filter(|secs| *secs > 0)
            .map(|secs| created_at.saturating_add(secs));

        Self {
            key,
            target_url,
            created_at,
            expires_at,
        }
    }
}

impl From<NewShortLink> for ShortLink {
    fn from(new_link: NewShortLink) -> Self {
        ShortLink::new(
            new_link.key,
            new_link.target_url,
            0,
            new_link.created_at,
            new_link.expires_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_short_link_without_expiry() {
        let new_link = NewShortLink::new(
            "abcdEFGH12345678".to_string(),
            "https://example.com".to_string(),
            None,
        );

        assert_eq!(new_link.key, "abcdEFGH12345678");
        assert!(new_link.expires_at.is_none());
        assert!(new_link.created_at > 0);
    }

    #[test]
    fn test_new_short_link_with_expiry() {
        let new_link = NewShortLink::new(
            "abcdEFGH12345678".to_string(),
            "https://example.com".to_string(),
            Some(60),
        );

        assert_eq!(new_link.expires_at, Some(new_link.created_at + 60));
    }

    #[test]
    fn test_zero_expires_in_means_no_expiry() {
        let new_link = NewShortLink::new(
            "abcdEFGH12345678".to_string(),
            "https://example.com".to_string(),
            Some(0),
        );

        assert!(new_link.expires_at.is_none());
    }

    #[test]
    fn test_link_from_new_link_starts_at_zero() {
        let link: ShortLink = NewShortLink::new(
            "abcdEFGH12345678".to_string(),
            "https://example.com".to_string(),
            None,
        )
        .into();

        assert_eq!(link.access_count, 0);
        assert!(!link.is_expired());
    }

    #[test]
    fn test_link_is_expired() {
        let now = unix_now();
        let link = ShortLink::new(
            "abcdEFGH12345678".to_string(),
            "https://example.com".to_string(),
            3,
            now - 100,
            Some(now - 1),
        );

        assert!(link.is_expired());
        assert!(link.is_expired_at(now - 1));
        assert!(!link.is_expired_at(now - 2));
    }
}
