use anyhow::{Context, Result};
use chrono::Duration;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionPool, Hashing, JwtConfig},
    di::{DependenciesInject, DependenciesInjectDeps, Repositories},
};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
}

impl AppState {
    pub async fn new(config: &Config, pool: ConnectionPool) -> Result<Self> {
        let hash = Arc::new(Hashing::new(config.bcrypt_cost)) as DynHashing;
        let jwt = Arc::new(JwtConfig::new(
            &config.jwt_secret,
            Duration::minutes(config.jwt_ttl_minutes),
        )) as DynJwtService;

        Self::from_repositories(Repositories::postgres(pool), hash, jwt).await
    }

    /// Builds the state over any storage, used directly by tests.
    pub async fn from_repositories(
        repositories: Repositories,
        hash: DynHashing,
        jwt: DynJwtService,
    ) -> Result<Self> {
        let mut registry = Registry::default();

        let di_container = DependenciesInject::new(
            DependenciesInjectDeps {
                repositories,
                hash,
                jwt: jwt.clone(),
            },
            &mut registry,
        )
        .await
        .context("Failed to initialize dependency injection container")?;

        Ok(Self {
            jwt_config: jwt,
            di_container,
            registry: Arc::new(Mutex::new(registry)),
        })
    }
}
