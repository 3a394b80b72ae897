use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use storefront_catalog::order_total;
use storefront_core::repository::OrderRepository;
use storefront_core::CoreResult;
use storefront_order::{Order, OrderManager};
use storefront_shared::OrderLine;
use crate::catalog_repo::InMemoryCatalogRepository;

pub struct InMemoryOrderRepository {
    catalog: Arc<InMemoryCatalogRepository>,
    orders: RwLock<OrderManager>,
}

impl InMemoryOrderRepository {
    pub fn new(catalog: Arc<InMemoryCatalogRepository>) -> Self {
        Self {
            catalog,
            orders: RwLock::new(OrderManager::new()),
        }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create_order(&self, customer_id: String, lines: Vec<OrderLine>) -> CoreResult<Order> {
        let total = order_total(self.catalog.catalog(), &lines)?;

        let mut orders = self.orders.write().await;
        let order = orders.create_order(customer_id, lines, total);
        info!("Order created: {} ({} lines, total {})", order.id, order.products.len(), order.total_amount);
        Ok(order)
    }

    async fn get_order(&self, id: &str) -> CoreResult<Option<Order>> {
        Ok(self.orders.read().await.get_order(id).cloned())
    }
}
