use storefront_shared::OrderLine;
use crate::product::Catalog;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PricingError {
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Quantity must be positive for product {0}")]
    EmptyLine(String),
}

/// Sum of `price * quantity` over every line of an order
pub fn order_total(catalog: &Catalog, lines: &[OrderLine]) -> Result<f64, PricingError> {
    lines.iter().try_fold(0.0, |total, line| {
        if line.quantity == 0 {
            return Err(PricingError::EmptyLine(line.product_id.clone()));
        }
        let product = catalog
            .find(&line.product_id)
            .ok_or_else(|| PricingError::UnknownProduct(line.product_id.clone()))?;
        Ok(total + product.price * f64::from(line.quantity))
    })
}
