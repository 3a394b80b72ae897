pub mod app_config;
pub mod catalog_repo;
pub mod order_repo;

pub use catalog_repo::InMemoryCatalogRepository;
pub use order_repo::InMemoryOrderRepository;
