use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::state::AppState;

/// GET /api/catalog/templates
/// Returns the pre-rendered catalog body; no per-request serialization.
pub async fn list_templates_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        state.catalog.body(),
    )
}
