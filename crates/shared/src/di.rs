use crate::{
    abstract_trait::{
        DynHashing, DynJwtService, DynLoginService, DynProductCommandRepository,
        DynProductQueryRepository, DynTextQueryRepository, DynTextService,
        DynUserQueryRepository,
    },
    config::ConnectionPool,
    repository::{ProductRepository, TextRepository, UserRepository},
    service::{LoginService, LoginServiceDeps, ProductService, TextService},
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

/// Storage seams the services are built over.
#[derive(Clone)]
pub struct Repositories {
    pub user_query: DynUserQueryRepository,
    pub product_query: DynProductQueryRepository,
    pub product_command: DynProductCommandRepository,
    pub text_query: DynTextQueryRepository,
}

impl Repositories {
    pub fn postgres(pool: ConnectionPool) -> Self {
        let users = UserRepository::new(pool.clone());
        let products = ProductRepository::new(pool.clone());
        let texts = TextRepository::new(pool);

        Self {
            user_query: users.query,
            product_query: products.query,
            product_command: products.command,
            text_query: texts.query,
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub login_service: DynLoginService,
    pub product_service: ProductService,
    pub text_service: DynTextService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("login_service", &"LoginService")
            .field("product_service", &self.product_service)
            .field("text_service", &"TextService")
            .finish()
    }
}

pub struct DependenciesInjectDeps {
    pub repositories: Repositories,
    pub hash: DynHashing,
    pub jwt: DynJwtService,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Result<Self> {
        let DependenciesInjectDeps {
            repositories,
            hash,
            jwt,
        } = deps;

        let login_service = LoginService::new(
            LoginServiceDeps {
                hash,
                jwt,
                query: repositories.user_query,
            },
            registry,
        )
        .await
        .context("failed initialize login service")?;

        let product_service = ProductService::new(
            repositories.product_query,
            repositories.product_command,
            registry,
        );

        let text_service = TextService::new(repositories.text_query, registry);

        Ok(Self {
            login_service: Arc::new(login_service) as DynLoginService,
            product_service,
            text_service: Arc::new(text_service) as DynTextService,
        })
    }
}
