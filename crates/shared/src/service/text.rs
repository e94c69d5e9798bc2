use crate::{
    abstract_trait::{DynTextQueryRepository, TextServiceTrait},
    domain::responses::TextsResponse,
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use tokio::time::Instant;
use tracing::{error, info};

pub struct TextService {
    query: DynTextQueryRepository,
    metrics: Metrics,
}

impl TextService {
    pub fn new(query: DynTextQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("text_service", registry);

        Self { query, metrics }
    }
}

#[async_trait]
impl TextServiceTrait for TextService {
    async fn get_texts(&self, page: &str, language: &str) -> Result<TextsResponse, ServiceError> {
        let start = Instant::now();

        let result = self.query.find_by_page(page, language).await;
        let elapsed = start.elapsed().as_secs_f64();

        match result {
            Ok(entries) => {
                self.metrics.record(Method::Get, Status::Success, elapsed);
                info!("🌐 {} texts for {page}/{language}", entries.len());

                Ok(entries
                    .into_iter()
                    .map(|entry| (entry.key, entry.value))
                    .collect())
            }
            Err(err) => {
                self.metrics.record(Method::Get, Status::Error, elapsed);
                error!("❌ Failed to load texts for {page}/{language}: {err:?}");
                Err(ServiceError::Repo(err))
            }
        }
    }
}
