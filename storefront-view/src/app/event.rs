use storefront_client::FetchError;
use storefront_shared::{OrderRecord, OrderStatus, Product};
use super::state::ViewState;

/// Completion of a backend call, as fed to the reducer
#[derive(Debug, Clone)]
pub enum ViewEvent {
    CatalogLoaded(Vec<Product>),
    CatalogFailed(FetchError),
    OrderCreated(OrderRecord),
    OrderFailed(FetchError),
    StatusLoaded {
        order_id: String,
        status: OrderStatus,
    },
    StatusFailed {
        order_id: String,
        error: FetchError,
    },
}

impl ViewEvent {
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            ViewEvent::CatalogFailed(error) | ViewEvent::OrderFailed(error) => Some(error),
            ViewEvent::StatusFailed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// A status result for an order that is no longer the current one
    pub fn is_stale_for(&self, state: &ViewState) -> bool {
        match self {
            ViewEvent::StatusLoaded { order_id, .. } | ViewEvent::StatusFailed { order_id, .. } => {
                state.current_order() != Some(order_id.as_str())
            }
            _ => false,
        }
    }
}
