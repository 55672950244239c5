//! Order API Module
//!
//! Public storefront routes: submit an order, look at the current list,
//! look up a single order.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/order", get(handler::list).post(handler::create))
        .route("/orders", get(handler::list))
        .route("/myorder/{id}", get(handler::get_by_id))
}
