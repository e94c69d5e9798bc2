use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::responses::ProductResponse,
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use tokio::time::Instant;
use tracing::{error, info};

pub struct ProductQueryService {
    query: DynProductQueryRepository,
    metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_query_service", registry);

        Self { query, metrics }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let start = Instant::now();

        match self.query.find_all().await {
            Ok(products) => {
                self.metrics.record(
                    Method::Get,
                    Status::Success,
                    start.elapsed().as_secs_f64(),
                );
                info!("✅ Listed {} products", products.len());
                Ok(products.into_iter().map(ProductResponse::from).collect())
            }
            Err(err) => {
                self.metrics
                    .record(Method::Get, Status::Error, start.elapsed().as_secs_f64());
                error!("❌ Failed to list products: {err:?}");
                Err(ServiceError::Repo(err))
            }
        }
    }
}
