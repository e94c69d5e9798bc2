use axum::{Json, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "Health"
)]
pub async fn health_checker_handler() -> impl IntoResponse {
    let body = HealthResponse {
        status: "ok".to_string(),
    };
    (StatusCode::OK, Json(body))
}

pub fn health_routes() -> OpenApiRouter {
    OpenApiRouter::new().route("/api/health", get(health_checker_handler))
}
