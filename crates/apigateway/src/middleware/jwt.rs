use axum::{
    Extension,
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::IntoResponse,
};
use shared::{abstract_trait::DynJwtService, errors::HttpError};
use tracing::warn;

/// Rejects the request with 401 unless it carries a valid
/// `Authorization: Bearer <token>`. On success the caller's user id is
/// available to handlers as `Extension<i32>`.
pub async fn auth_middleware(
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_value| auth_value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            HttpError::Unauthorized("You are not logged in, please provide token".to_string())
        })?;

    let claims = jwt.verify_token(token).map_err(|err| {
        warn!("🔐 Bearer token rejected: {err}");
        HttpError::from(err)
    })?;

    req.extensions_mut().insert(claims.user_id);

    Ok(next.run(req).await)
}
