use crate::{
    domain::{
        product_field::{FieldValue, ProductField},
        requests::UpdateProductFieldRequest,
        responses::ProductResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::Product as ProductModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;
pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// Every product, ascending by id.
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    /// Sets one column and stamps `updated_at`. `NotFound` when no row has `id`.
    async fn update_field(
        &self,
        id: i32,
        field: ProductField,
        value: &FieldValue,
    ) -> Result<ProductModel, RepositoryError>;
}

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn update_field(
        &self,
        id: i32,
        req: &UpdateProductFieldRequest,
    ) -> Result<ProductResponse, ServiceError>;
}
