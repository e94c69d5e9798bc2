use crate::{
    middleware::{
        jwt::auth_middleware,
        validate::{SimplePath, SimpleValidatedJson},
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, put},
};
use shared::{
    domain::{requests::UpdateProductFieldRequest, responses::ProductResponse},
    errors::{ErrorResponse, HttpError},
    service::ProductService,
};
use std::sync::Arc;
use tracing::info;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All products ascending by id", body = Vec<ProductResponse>),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<ProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.query.find_all().await?;
    Ok((StatusCode::OK, Json(products)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductFieldRequest,
    responses(
        (status = 200, description = "Updated product", body = ProductResponse),
        (status = 400, description = "Invalid id, field or value", body = ErrorResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn update_product_field(
    Extension(service): Extension<ProductService>,
    Extension(user_id): Extension<i32>,
    SimplePath(id): SimplePath<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProductFieldRequest>,
) -> Result<impl IntoResponse, HttpError> {
    info!("✏️ User {user_id} updates {} on product {id}", body.field);

    let product = service.command.update_field(id, &body).await?;
    Ok((StatusCode::OK, Json(product)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products/{id}", put(update_product_field))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.product_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
