pub mod health;
pub mod templates;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/catalog/health", get(health::health_handler))
        .route(
            "/api/catalog/templates",
            get(templates::list_templates_handler),
        )
        .fallback(not_found)
        .with_state(state)
}
