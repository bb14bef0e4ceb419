//! PostgreSQL store tests.
//!
//! Need a database: `DATABASE_URL=postgres://... cargo test -- --ignored`.

use shortkey::domain::entities::{NewShortLink, unix_now};
use shortkey::domain::repositories::LinkStore;
use shortkey::infrastructure::persistence::PgLinkStore;
use sqlx::PgPool;
use std::sync::Arc;

const KEY: &str = "aB3dE5fG7hJ9kL1m";

fn new_link(key: &str, url: &str) -> NewShortLink {
    NewShortLink::new(key.to_string(), url.to_string(), None)
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_put_and_get(pool: PgPool) {
    let store = PgLinkStore::new(Arc::new(pool));

    store.put(new_link(KEY, "https://example.com")).await.unwrap();

    let first = store.get(KEY).await.unwrap().unwrap();
    let second = store.get(KEY).await.unwrap().unwrap();

    assert_eq!(first.target_url, "https://example.com");
    assert_eq!(first.access_count, 0);
    assert_eq!(second.access_count, 1);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_get_missing(pool: PgPool) {
    let store = PgLinkStore::new(Arc::new(pool));

    assert!(store.get(KEY).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_put_overwrites(pool: PgPool) {
    let store = PgLinkStore::new(Arc::new(pool));
    store.put(new_link(KEY, "https://first.com")).await.unwrap();
    store.get(KEY).await.unwrap();

    store.put(new_link(KEY, "https://second.com")).await.unwrap();

    let links = store.list().await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].target_url, "https://second.com");
    assert_eq!(links[0].access_count, 0);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_put_if_absent(pool: PgPool) {
    let store = PgLinkStore::new(Arc::new(pool));

    assert!(store.put_if_absent(new_link(KEY, "https://first.com")).await.unwrap());
    assert!(!store.put_if_absent(new_link(KEY, "https://second.com")).await.unwrap());

    let link = store.get(KEY).await.unwrap().unwrap();
    assert_eq!(link.target_url, "https://first.com");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_expired_link_hidden_and_reusable(pool: PgPool) {
    let store = PgLinkStore::new(Arc::new(pool));
    let now = unix_now();
    store
        .put(NewShortLink {
            key: KEY.to_string(),
            target_url: "https://old.com".to_string(),
            created_at: now - 120,
            expires_at: Some(now - 60),
        })
        .await
        .unwrap();

    assert!(store.get(KEY).await.unwrap().is_none());
    assert!(store.list().await.unwrap().is_empty());

    assert!(store.put_if_absent(new_link(KEY, "https://new.com")).await.unwrap());
    let link = store.get(KEY).await.unwrap().unwrap();
    assert_eq!(link.target_url, "https://new.com");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_delete_idempotent(pool: PgPool) {
    let store = PgLinkStore::new(Arc::new(pool));
    store.put(new_link(KEY, "https://example.com")).await.unwrap();

    store.delete(KEY).await.unwrap();
    store.delete(KEY).await.unwrap();

    assert!(store.get(KEY).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_list_and_health_check(pool: PgPool) {
    sqlx::query("INSERT INTO short_links (id, redirect_url, access_count, created_at) VALUES ($1, $2, 0, $3)")
        .bind(KEY)
        .bind("https://example.com")
        .bind(unix_now())
        .execute(&pool)
        .await
        .unwrap();

    let store = PgLinkStore::new(Arc::new(pool));

    let links = store.list().await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].key, KEY);
    assert!(store.health_check().await);
}
