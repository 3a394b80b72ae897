use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use storefront_shared::{OrderRecord, OrderRequest, OrderStatus, Product};
use crate::api::StorefrontApi;
use crate::error::{BuildError, FetchError};

/// [`StorefrontApi`] over HTTP/JSON
#[derive(Debug, Clone)]
pub struct HttpStorefront {
    client: Client,
    base_url: Url,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpStorefront {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, BuildError> {
        let invalid = |reason: String| BuildError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let base_url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .map(|body| body.error)
                .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned());
            return Err(FetchError::Server {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl StorefrontApi for HttpStorefront {
    async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        let url = self.endpoint(&["products"]);
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::decode(response).await
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<OrderRecord, FetchError> {
        let url = self.endpoint(&["orders"]);
        debug!("POST {} ({} lines)", url, request.products.len());
        let response = self.client.post(url).json(request).send().await?;
        Self::decode(response).await
    }

    async fn order_status(&self, order_id: &str) -> Result<OrderStatus, FetchError> {
        let url = self.endpoint(&["orders", order_id]);
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::decode(response).await
    }
}
