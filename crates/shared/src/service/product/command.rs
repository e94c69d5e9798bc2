use crate::{
    abstract_trait::{DynProductCommandRepository, ProductCommandServiceTrait},
    domain::{
        product_field::ProductField, requests::UpdateProductFieldRequest,
        responses::ProductResponse,
    },
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use tokio::time::Instant;
use tracing::{error, info, warn};

/// Single-field product edits.
///
/// Concurrent edits of the same field are last-write-wins; there is no
/// version precondition on the row.
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_command_service", registry);

        Self { command, metrics }
    }

    async fn apply(
        &self,
        id: i32,
        req: &UpdateProductFieldRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let field = req.field.parse::<ProductField>().inspect_err(|_| {
            warn!("✋ Rejected update of non-editable field {:?}", req.field);
        })?;
        let value = field.coerce(&req.value)?;

        let product = self.command.update_field(id, field, &value).await?;

        info!("✏️ Product ID {id}: {field} updated");
        Ok(ProductResponse::from(product))
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn update_field(
        &self,
        id: i32,
        req: &UpdateProductFieldRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let start = Instant::now();

        let result = self.apply(id, req).await;

        let status = match &result {
            Ok(_) => Status::Success,
            Err(err) => {
                error!("❌ Failed to update product ID {id}: {err}");
                Status::Error
            }
        };
        self.metrics
            .record(Method::Put, status, start.elapsed().as_secs_f64());

        result
    }
}
