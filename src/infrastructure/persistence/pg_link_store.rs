//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink, unix_now};
use crate::domain::repositories::{LinkStore, record_access};
use crate::error::StorageError;

/// Row shape of the `short_links` table.
#[derive(Debug, FromRow)]
struct ShortLinkRow {
    id: String,
    redirect_url: String,
    access_count: i64,
    created_at: i64,
    expires_at: Option<i64>,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink::new(
            row.id,
            row.redirect_url,
            row.access_count,
            row.created_at,
            row.expires_at,
        )
    }
}

/// PostgreSQL store for short links.
///
/// Uses runtime-checked SQLx queries with bound parameters. The access
/// counter is bumped with a single `UPDATE ... SET access_count =
/// access_count + 1`, so concurrent redirects never lose increments.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn increment_access_count(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("UPDATE short_links SET access_count = access_count + 1 WHERE id = $1")
            .bind(key)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn get(&self, key: &str) -> Result<Option<ShortLink>, StorageError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, redirect_url, access_count, created_at, expires_at
            FROM short_links
            WHERE id = $1 AND (expires_at IS NULL OR expires_at > $2)
            "#,
        )
        .bind(key)
        .bind(unix_now())
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        record_access(key, self.increment_access_count(key)).await;

        Ok(Some(row.into()))
    }

    async fn put(&self, new_link: NewShortLink) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO short_links (id, redirect_url, access_count, created_at, expires_at)
            VALUES ($1, $2, 0, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET redirect_url = EXCLUDED.redirect_url,
                access_count = 0,
                created_at = EXCLUDED.created_at,
                expires_at = EXCLUDED.expires_at
            "#,
        )
        .bind(&new_link.key)
        .bind(&new_link.target_url)
        .bind(new_link.created_at)
        .bind(new_link.expires_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn put_if_absent(&self, new_link: NewShortLink) -> Result<bool, StorageError> {
        // An expired row is overwritten in place; a live one blocks the insert.
        let result = sqlx::query(
            r#"
            INSERT INTO short_links (id, redirect_url, access_count, created_at, expires_at)
            VALUES ($1, $2, 0, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET redirect_url = EXCLUDED.redirect_url,
                access_count = 0,
                created_at = EXCLUDED.created_at,
                expires_at = EXCLUDED.expires_at
            WHERE short_links.expires_at IS NOT NULL
              AND short_links.expires_at <= EXCLUDED.created_at
            "#,
        )
        .bind(&new_link.key)
        .bind(&new_link.target_url)
        .bind(new_link.created_at)
        .bind(new_link.expires_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM short_links WHERE id = $1")
            .bind(key)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<ShortLink>, StorageError> {
        let rows: Vec<PgRow> = sqlx::query(
            r#"
            SELECT id, redirect_url, access_count, created_at, expires_at
            FROM short_links
            WHERE expires_at IS NULL OR expires_at > $1
            "#,
        )
        .bind(unix_now())
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut links = Vec::with_capacity(rows.len());
        for row in &rows {
            match ShortLinkRow::from_row(row) {
                Ok(decoded) => links.push(decoded.into()),
                Err(e) => {
                    let e = StorageError::Decode(e.to_string());
                    tracing::debug!(error = %e, "Skipping undecodable row");
                }
            }
        }

        Ok(links)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
