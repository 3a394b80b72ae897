pub mod models;
pub mod manager;

pub use models::{Order, OrderState};
pub use manager::OrderManager;
