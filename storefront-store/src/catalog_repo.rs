use async_trait::async_trait;
use storefront_catalog::{Catalog, CatalogProduct};
use storefront_core::repository::ProductRepository;
use storefront_core::CoreResult;

pub struct InMemoryCatalogRepository {
    catalog: Catalog,
}

impl InMemoryCatalogRepository {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn seeded() -> Self {
        Self::new(Catalog::seeded())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalogRepository {
    async fn list_products(&self) -> CoreResult<Vec<CatalogProduct>> {
        Ok(self.catalog.list().to_vec())
    }

    async fn get_product(&self, id: &str) -> CoreResult<Option<CatalogProduct>> {
        Ok(self.catalog.find(id).cloned())
    }
}
