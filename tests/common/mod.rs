#![allow(dead_code)]

use axum_test::TestServer;
use shortkey::domain::entities::NewShortLink;
use shortkey::domain::repositories::LinkStore;
use shortkey::infrastructure::persistence::MemoryLinkStore;
use shortkey::routes::app_router;
use shortkey::state::AppState;
use std::sync::Arc;

pub const HOST: &str = "sho.rt";

/// Full application over an in-memory store, with the store handle kept for
/// seeding and inspection.
pub fn create_test_server() -> (TestServer, Arc<MemoryLinkStore>) {
    let store = Arc::new(MemoryLinkStore::new());
    let state = AppState::new(store.clone());
    let app = app_router(state, false);

    (TestServer::new(app).unwrap(), store)
}

pub async fn create_test_link(store: &MemoryLinkStore, key: &str, url: &str) {
    store
        .put(NewShortLink::new(key.to_string(), url.to_string(), None))
        .await
        .unwrap();
}

pub async fn create_expired_link(store: &MemoryLinkStore, key: &str, url: &str) {
    let now = shortkey::domain::entities::unix_now();
    store
        .put(NewShortLink {
            key: key.to_string(),
            target_url: url.to_string(),
            created_at: now - 3600,
            expires_at: Some(now - 60),
        })
        .await
        .unwrap();
}

/// Extracts the key from a `"<host>/g/<key>"` short URL.
pub fn key_from_short_url(short_url: &str) -> String {
    short_url
        .rsplit_once("/g/")
        .map(|(_, key)| key.to_string())
        .unwrap()
}
