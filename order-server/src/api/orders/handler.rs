//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Order, OrderId};
use shared::request::OrderSubmission;

use crate::api::extract::JsonBody;
use crate::api::views::OrderView;
use crate::core::ServerState;
use crate::utils::AppResult;

/// Submit an order
///
/// Lines are resolved against the menu; the stored order (with its new id)
/// is returned.
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(submission): JsonBody<OrderSubmission>,
) -> AppResult<Json<Order>> {
    let draft = state.catalog.resolve(&submission)?;
    let order = state.orders.create(draft)?;
    Ok(Json(order))
}

/// List all live orders
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderView>>> {
    let orders = state.orders.list()?;
    Ok(Json(orders.iter().map(OrderView::from).collect()))
}

/// Get order by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderView>> {
    let order = state.orders.get(&OrderId::new(id))?;
    Ok(Json(OrderView::from(&order)))
}
