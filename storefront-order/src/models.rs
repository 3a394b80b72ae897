use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;
use storefront_shared::{Masked, OrderLine};

/// Order status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    Pending,
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderState::Pending => write!(f, "pending"),
        }
    }
}

/// A customer's purchase as the backend records it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_id: Masked<String>,
    pub products: Vec<OrderLine>,
    pub total_amount: f64,
    pub status: OrderState,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(id: String, customer_id: String, products: Vec<OrderLine>, total_amount: f64) -> Self {
        Self {
            id,
            customer_id: Masked(customer_id),
            products,
            total_amount,
            status: OrderState::Pending,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_serialization() {
        let order = Order::new("order_1".into(), "123".into(), vec![OrderLine::new("1", 2)], 59.98);
        let value = serde_json::to_value(&order).unwrap();

        assert_eq!(value["id"], "order_1");
        assert_eq!(value["customerId"], "123");
        assert_eq!(value["products"][0]["productId"], "1");
        assert_eq!(value["products"][0]["quantity"], 2);
        assert_eq!(value["totalAmount"], 59.98);
        assert_eq!(value["status"], "pending");
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn test_state_display_matches_wire() {
        assert_eq!(OrderState::Pending.to_string(), "pending");
    }
}
