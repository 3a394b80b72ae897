//! The storefront component: a product list, a "Create Order" button and an
//! order status panel, driven by three backend calls.

pub mod app;
pub mod component;

pub use app::{render, Affordance, Screen, ViewEvent, ViewState};
pub use component::{Action, ActionError, OrderDraft, Storefront};
