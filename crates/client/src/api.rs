use crate::{error::ClientError, language::Language};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{
    domain::{
        product_field::ProductField,
        requests::{LoginRequest, UpdateProductFieldRequest},
        responses::{ProductResponse, TextsResponse, TokenResponse},
    },
    errors::ErrorResponse,
};
use std::{sync::Arc, time::Duration};
use tracing::debug;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub type DynPricelistApi = Arc<dyn PricelistApi>;

/// The REST surface the views talk to.
#[async_trait]
pub trait PricelistApi: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ClientError>;

    async fn texts(&self, page: &str, language: Language) -> Result<TextsResponse, ClientError>;

    async fn products(&self, token: &str) -> Result<Vec<ProductResponse>, ClientError>;

    async fn update_product(
        &self,
        token: &str,
        id: i32,
        field: ProductField,
        value: Value,
    ) -> Result<ProductResponse, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl PricelistApi for HttpApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ClientError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    async fn texts(&self, page: &str, language: Language) -> Result<TextsResponse, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/api/texts/{page}")))
            .query(&[("lang", language.code())])
            .send()
            .await?;
        decode(response).await
    }

    async fn products(&self, token: &str) -> Result<Vec<ProductResponse>, ClientError> {
        let response = self
            .client
            .get(self.url("/api/products"))
            .bearer_auth(token)
            .send()
            .await?;
        decode(response).await
    }

    async fn update_product(
        &self,
        token: &str,
        id: i32,
        field: ProductField,
        value: Value,
    ) -> Result<ProductResponse, ClientError> {
        let body = UpdateProductFieldRequest {
            field: field.column().to_string(),
            value,
        };

        let response = self
            .client
            .put(self.url(&format!("/api/products/{id}")))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorResponse>(&body)
            .ok()
            .map(|e| e.message);
        debug!("request failed with {status}: {message:?}");

        return Err(if status == StatusCode::UNAUTHORIZED {
            ClientError::Unauthorized(message)
        } else {
            ClientError::Rejected {
                status: status.as_u16(),
                message,
            }
        });
    }

    serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
}
