use async_trait::async_trait;
use storefront_catalog::CatalogProduct;
use storefront_order::Order;
use storefront_shared::OrderLine;
use crate::CoreResult;

/// Repository trait for product catalog access
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list_products(&self) -> CoreResult<Vec<CatalogProduct>>;

    async fn get_product(&self, id: &str) -> CoreResult<Option<CatalogProduct>>;
}

/// Repository trait for order data access
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Prices the lines against the catalog and stores a new pending order
    async fn create_order(&self, customer_id: String, lines: Vec<OrderLine>) -> CoreResult<Order>;

    async fn get_order(&self, id: &str) -> CoreResult<Option<Order>>;
}
