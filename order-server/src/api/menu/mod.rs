//! Menu API
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /items | GET | 完整菜单 (含规格价格和加料) |

use axum::{Json, Router, extract::State, routing::get};
use shared::models::MenuItem;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/items", get(list_items))
}

async fn list_items(State(state): State<ServerState>) -> Json<Vec<MenuItem>> {
    Json(state.catalog.items().to_vec())
}
