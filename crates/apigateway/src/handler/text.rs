use crate::{middleware::validate::SimplePath, state::AppState};
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::DynTextService,
    domain::requests::TextQuery,
    errors::{ErrorResponse, HttpError},
};
use std::{collections::BTreeMap, sync::Arc};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/texts/{page}",
    params(
        ("page" = String, Path, description = "Page the texts belong to"),
        TextQuery
    ),
    responses(
        (status = 200, description = "Localized texts keyed by name", body = BTreeMap<String, String>),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    tag = "Text"
)]
pub async fn get_texts(
    Extension(service): Extension<DynTextService>,
    SimplePath(page): SimplePath<String>,
    Query(query): Query<TextQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let texts = service.get_texts(&page, query.language()).await?;
    Ok((StatusCode::OK, Json(texts)))
}

pub fn text_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/texts/{page}", get(get_texts))
        .layer(Extension(app_state.di_container.text_service.clone()))
}
