//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkStore;

/// Handler state, built once at startup.
///
/// Cloning is cheap: the service sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Wires the service layer on top of the given store.
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store)),
        }
    }
}
