use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// GET /api/catalog/health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "UP" })
}
