use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{Extension, Json, http::StatusCode, response::IntoResponse, routing::post};
use shared::{
    abstract_trait::DynLoginService,
    domain::{requests::LoginRequest, responses::TokenResponse},
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Missing username or password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login_user_handler(
    Extension(service): Extension<DynLoginService>,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/auth/login", post(login_user_handler))
        .layer(Extension(app_state.di_container.login_service.clone()))
}
