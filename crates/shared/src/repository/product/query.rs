use crate::{
    abstract_trait::ProductQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{PRODUCT_COLUMNS, Product as ProductModel},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id ASC");

        let products = sqlx::query_as::<_, ProductModel>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {:?}", e);
                RepositoryError::from(e)
            })?;

        info!("🔍 Fetched {} products", products.len());
        Ok(products)
    }
}
