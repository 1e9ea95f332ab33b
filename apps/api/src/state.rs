use std::sync::Arc;

use crate::catalog::Catalog;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup, so clones share everything through `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
