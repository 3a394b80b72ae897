use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use storefront_order::Order;
use storefront_shared::OrderRequest;
use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders/{id}", get(get_order))
}

/// POST /orders
/// Prices the lines, stores a pending order and returns it in full
async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<OrderRequest>,
) -> Result<Json<Order>, AppError> {
    tracing::debug!("Creating order for customer {} with {} lines", req.customer_id, req.products.len());
    let order = state.orders
        .create_order(req.customer_id.into_inner(), req.products)
        .await?;
    Ok(Json(order))
}

/// GET /orders/{id}
async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, AppError> {
    let order = state.orders.get_order(&order_id).await?
        .ok_or_else(|| AppError::NotFoundError("Order not found".to_string()))?;
    Ok(Json(order))
}
