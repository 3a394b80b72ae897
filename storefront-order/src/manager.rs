use crate::models::Order;
use std::collections::HashMap;
use storefront_shared::OrderLine;

/// Keeps every order created by the service
pub struct OrderManager {
    orders: HashMap<String, Order>,
}

impl OrderManager {
    pub fn new() -> Self {
        Self {
            orders: HashMap::new(),
        }
    }

    /// Create a new order. Ids are sequential (`order_1`, `order_2`, ...);
    /// identical submissions produce distinct orders.
    pub fn create_order(
        &mut self,
        customer_id: String,
        products: Vec<OrderLine>,
        total_amount: f64,
    ) -> Order {
        // Orders are never removed, so the next id is always free
        let id = format!("order_{}", self.orders.len() + 1);
        let order = Order::new(id, customer_id, products, total_amount);
        self.orders.insert(order.id.clone(), order.clone());
        order
    }

    /// Get an order by ID
    pub fn get_order(&self, order_id: &str) -> Option<&Order> {
        self.orders.get(order_id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrderManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderState;

    #[test]
    fn test_order_lifecycle() {
        let mut manager = OrderManager::new();
        assert!(manager.is_empty());

        let order = manager
            .create_order("123".to_string(), vec![OrderLine::new("1", 1)], 29.99);
        assert_eq!(order.id, "order_1");
        assert_eq!(order.status, OrderState::Pending);

        let stored = manager.get_order("order_1").unwrap();
        assert_eq!(stored.total_amount, 29.99);
        assert_eq!(stored.customer_id.expose(), "123");
        assert!(manager.get_order("order_2").is_none());
    }

    #[test]
    fn test_identical_submissions_create_two_orders() {
        let mut manager = OrderManager::new();
        let lines = vec![OrderLine::new("1", 1)];

        let first = manager.create_order("123".into(), lines.clone(), 29.99);
        let second = manager.create_order("123".into(), lines, 29.99);

        assert_ne!(first.id, second.id);
        assert_eq!(second.id, "order_2");
        assert_eq!(manager.len(), 2);
    }
}
