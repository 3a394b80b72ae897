use serde::{Deserialize, Serialize};
use crate::pii::Masked;

/// One line of a purchase request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_id: Masked<String>,
    pub products: Vec<OrderLine>,
}

/// The part of a created order the storefront keeps: its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
}

/// Server-reported state and total of an existing order.
/// `status` is passed through as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatus {
    pub status: String,
    pub total_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_request_wire_shape() {
        let request = OrderRequest {
            customer_id: Masked("123".to_string()),
            products: vec![OrderLine::new("1", 1)],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"customerId": "123", "products": [{"productId": "1", "quantity": 1}]})
        );
        assert!(!format!("{:?}", request).contains("123"));
    }

    #[test]
    fn test_order_status_reads_full_order_body() {
        let body = json!({
            "id": "order_1",
            "customerId": "123",
            "products": [],
            "totalAmount": 19.98,
            "status": "SHIPPED",
            "createdAt": "2024-01-01T00:00:00Z"
        });

        let status: OrderStatus = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(status.status, "SHIPPED");
        assert_eq!(status.total_amount, 19.98);

        let record: OrderRecord = serde_json::from_value(body).unwrap();
        assert_eq!(record.id, "order_1");
    }
}
