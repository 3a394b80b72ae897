use std::sync::Arc;
use storefront_core::repository::{OrderRepository, ProductRepository};
use storefront_store::{InMemoryCatalogRepository, InMemoryOrderRepository};

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub orders: Arc<dyn OrderRepository>,
}

impl AppState {
    /// Seeded catalog and an empty order book, all in memory
    pub fn in_memory() -> Self {
        let catalog = Arc::new(InMemoryCatalogRepository::seeded());
        let orders = Arc::new(InMemoryOrderRepository::new(catalog.clone()));
        Self {
            products: catalog,
            orders,
        }
    }
}
