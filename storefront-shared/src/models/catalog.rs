use serde::{Deserialize, Serialize};

/// A catalog item as the storefront displays it.
/// Extra fields sent by the server are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_ignores_server_only_fields() {
        let body = r#"{"id":"1","name":"Product A","description":"Description of Product A","price":29.99,"stock":100,"category":"Electronics"}"#;
        let product: Product = serde_json::from_str(body).unwrap();

        assert_eq!(product.id, "1");
        assert_eq!(product.name, "Product A");
        assert_eq!(product.price, 29.99);
    }

    #[test]
    fn test_product_rejects_non_numeric_price() {
        let body = r#"{"id":"1","name":"Widget","price":"9.99"}"#;
        assert!(serde_json::from_str::<Product>(body).is_err());
    }
}
