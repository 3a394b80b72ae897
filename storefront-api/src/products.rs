use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use storefront_catalog::CatalogProduct;
use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
}

/// GET /products
async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<CatalogProduct>>, AppError> {
    let products = state.products.list_products().await?;
    Ok(Json(products))
}

/// GET /products/{id}
async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<CatalogProduct>, AppError> {
    let product = state.products.get_product(&product_id).await?
        .ok_or_else(|| AppError::NotFoundError("Product not found".to_string()))?;
    Ok(Json(product))
}
