pub mod product;
pub mod pricing;

pub use product::{Catalog, CatalogProduct};
pub use pricing::{order_total, PricingError};
