use serde::{Deserialize, Serialize};
use storefront_shared::Product;

/// Core product structure, as stored and served by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
}

impl CatalogProduct {
    fn demo(id: &str, letter: char, price: f64, stock: u32, category: &str) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Product {}", letter),
            description: format!("Description of Product {}", letter),
            price,
            stock,
            category: category.to_string(),
        }
    }

    /// The subset of fields the storefront renders
    pub fn to_wire(&self) -> Product {
        Product {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
        }
    }
}

/// Read-only product catalog. Products keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<CatalogProduct>,
}

impl Catalog {
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }

    /// The five demo products the service ships with
    pub fn seeded() -> Self {
        Self::new(vec![
            CatalogProduct::demo("1", 'A', 29.99, 100, "Electronics"),
            CatalogProduct::demo("2", 'B', 49.99, 50, "Home"),
            CatalogProduct::demo("3", 'C', 19.99, 200, "Books"),
            CatalogProduct::demo("4", 'D', 99.99, 30, "Clothing"),
            CatalogProduct::demo("5", 'E', 15.99, 150, "Toys"),
        ])
    }

    pub fn list(&self) -> &[CatalogProduct] {
        &self.products
    }

    pub fn find(&self, product_id: &str) -> Option<&CatalogProduct> {
        self.products.iter().find(|product| product.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();
        let ids: Vec<&str> = catalog.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);

        let product = catalog.find("4").unwrap();
        assert_eq!(product.name, "Product D");
        assert_eq!(product.description, "Description of Product D");
        assert_eq!(product.price, 99.99);
        assert_eq!(product.stock, 30);
        assert_eq!(product.category, "Clothing");

        assert!(catalog.find("6").is_none());
    }

    #[test]
    fn test_to_wire_keeps_display_fields() {
        let catalog = Catalog::seeded();
        let wire = catalog.find("1").unwrap().to_wire();
        assert_eq!(wire, Product { id: "1".into(), name: "Product A".into(), price: 29.99 });
    }
}
