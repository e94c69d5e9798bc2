use crate::{
    abstract_trait::{DynTextQueryRepository, TextQueryRepositoryTrait},
    config::ConnectionPool,
    errors::RepositoryError,
    model::TextEntry,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

#[derive(Clone)]
pub struct TextRepository {
    pub query: DynTextQueryRepository,
}

impl TextRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(TextQueryRepository { db: pool }) as DynTextQueryRepository;
        Self { query }
    }
}

struct TextQueryRepository {
    db: ConnectionPool,
}

#[async_trait]
impl TextQueryRepositoryTrait for TextQueryRepository {
    async fn find_by_page(
        &self,
        page: &str,
        language: &str,
    ) -> Result<Vec<TextEntry>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, TextEntry>(
            r#"
            SELECT key, value
            FROM texts
            WHERE page = $1 AND language = $2
            ORDER BY key
            "#,
        )
        .bind(page)
        .bind(language)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch texts for {page}/{language}: {:?}", err);
            RepositoryError::from(err)
        })
    }
}
