use std::fmt;
use super::state::ViewState;

/// Something the user can press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    CreateOrder,
    CheckOrderStatus,
}

impl Affordance {
    pub fn label(self) -> &'static str {
        match self {
            Affordance::CreateOrder => "Create Order",
            Affordance::CheckOrderStatus => "Check Order Status",
        }
    }
}

/// A rendered frame of the component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub lines: Vec<String>,
    pub affordances: Vec<Affordance>,
}

impl Screen {
    fn text(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn button(&mut self, affordance: Affordance) {
        self.lines.push(format!("[{}]", affordance.label()));
        self.affordances.push(affordance);
    }

    fn banner(&mut self, site: &str, message: Option<&str>) {
        if let Some(message) = message {
            self.lines.push(format!("! {}: {}", site, message));
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn offers(&self, affordance: Affordance) -> bool {
        self.affordances.contains(&affordance)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Products are listed as `{name} - ${price}`. The order region appears only
/// once an order id exists, the status detail and status error only for the
/// current order.
pub fn render(state: &ViewState) -> Screen {
    let mut screen = Screen::default();

    screen.text("Product List");
    for product in &state.products {
        screen.text(format!("  - {} - ${}", product.name, product.price));
    }
    screen.banner("catalog", state.banners.catalog.as_deref());

    screen.button(Affordance::CreateOrder);
    screen.banner("order", state.banners.order.as_deref());

    if let Some(order_id) = state.current_order() {
        screen.text(format!("Order ID: {}", order_id));
        screen.button(Affordance::CheckOrderStatus);
        if let Some(status) = state.current_status() {
            screen.text(format!("Order Status: {}", status.status));
            screen.text(format!("Total Amount: ${}", status.total_amount));
        }
        screen.banner("status", state.current_status_banner());
    }

    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{StatusBanner, StatusSnapshot};
    use storefront_shared::{OrderStatus, Product};

    #[test]
    fn test_initial_screen() {
        let screen = render(&ViewState::default());
        assert_eq!(screen.lines, vec!["Product List", "[Create Order]"]);
        assert_eq!(screen.affordances, vec![Affordance::CreateOrder]);
        assert!(!screen.offers(Affordance::CheckOrderStatus));
    }

    #[test]
    fn test_full_screen() {
        let state = ViewState {
            products: vec![
                Product { id: "1".into(), name: "Widget".into(), price: 9.99 },
                Product { id: "2".into(), name: "Gadget".into(), price: 10.0 },
            ],
            order_id: Some("ord-1".into()),
            order_status: Some(StatusSnapshot {
                order_id: "ord-1".into(),
                status: OrderStatus { status: "SHIPPED".into(), total_amount: 19.98 },
            }),
            ..Default::default()
        };

        let screen = render(&state);
        assert_eq!(
            screen.to_string(),
            "Product List\n  - Widget - $9.99\n  - Gadget - $10\n[Create Order]\nOrder ID: ord-1\n[Check Order Status]\nOrder Status: SHIPPED\nTotal Amount: $19.98\n"
        );
        assert_eq!(screen.affordances, vec![Affordance::CreateOrder, Affordance::CheckOrderStatus]);
    }

    #[test]
    fn test_banners_render_under_their_region() {
        let mut state = ViewState::default();
        state.banners.catalog = Some("Network error: refused".into());
        state.banners.status = Some(StatusBanner {
            order_id: "ord-1".into(),
            message: "hidden without an order".into(),
        });

        let screen = render(&state);
        assert_eq!(
            screen.lines,
            vec!["Product List", "! catalog: Network error: refused", "[Create Order]"]
        );
    }
}
