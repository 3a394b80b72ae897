use async_trait::async_trait;
use storefront_shared::{OrderRecord, OrderRequest, OrderStatus, Product};
use crate::error::FetchError;

/// The three backend calls the storefront makes
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, FetchError>;

    /// `POST /orders`
    async fn create_order(&self, request: &OrderRequest) -> Result<OrderRecord, FetchError>;

    /// `GET /orders/{id}`
    async fn order_status(&self, order_id: &str) -> Result<OrderStatus, FetchError>;
}
