pub mod models;
pub mod pii;

pub use models::catalog::Product;
pub use models::orders::{OrderLine, OrderRecord, OrderRequest, OrderStatus};
pub use pii::Masked;
