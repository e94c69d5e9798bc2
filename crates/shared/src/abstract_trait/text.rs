use crate::{
    domain::responses::TextsResponse,
    errors::{RepositoryError, ServiceError},
    model::TextEntry,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTextQueryRepository = Arc<dyn TextQueryRepositoryTrait + Send + Sync>;
pub type DynTextService = Arc<dyn TextServiceTrait + Send + Sync>;

#[async_trait]
pub trait TextQueryRepositoryTrait {
    async fn find_by_page(
        &self,
        page: &str,
        language: &str,
    ) -> Result<Vec<TextEntry>, RepositoryError>;
}

#[async_trait]
pub trait TextServiceTrait {
    async fn get_texts(&self, page: &str, language: &str) -> Result<TextsResponse, ServiceError>;
}
