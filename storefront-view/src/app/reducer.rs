use super::event::ViewEvent;
use super::state::{StatusBanner, StatusSnapshot, ViewState};

/// Applies one backend completion to the view state
pub fn reduce(state: &mut ViewState, event: ViewEvent) {
    match event {
        ViewEvent::CatalogLoaded(products) => {
            state.products = products;
            state.banners.catalog = None;
        }
        ViewEvent::CatalogFailed(error) => {
            state.banners.catalog = Some(error.to_string());
        }
        ViewEvent::OrderCreated(record) => {
            state.order_id = Some(record.id);
            state.banners.order = None;
        }
        ViewEvent::OrderFailed(error) => {
            state.banners.order = Some(error.to_string());
        }
        ViewEvent::StatusLoaded { order_id, status } => {
            state.order_status = Some(StatusSnapshot { order_id, status });
            state.banners.status = None;
        }
        ViewEvent::StatusFailed { order_id, error } => {
            state.banners.status = Some(StatusBanner { order_id, message: error.to_string() });
        }
    }
}
