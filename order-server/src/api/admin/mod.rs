//! Admin API Module
//!
//! 管理路由的路径都以店铺 secret 结尾，secret 就是唯一的访问控制：
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /admin{secret} | GET | 订单总览 (摘要、价格、付款状态、总额) |
//! | /admin{secret} | POST | 修改付款状态 `{id, isPaid}` |
//! | /deleteOrder{secret} | POST | 删除订单 `{id}` |
//! | /ticket{secret} | GET | 厨房小票预览 |
//! | /faxorder{secret} | POST | 生成小票并传真 `{name, number}` |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Admin router; `secret` has already been validated as path-safe
pub fn router(secret: &str) -> Router<ServerState> {
    Router::new()
        .route(
            &format!("/admin{secret}"),
            get(handler::overview).post(handler::update_payment),
        )
        .route(&format!("/deleteOrder{secret}"), post(handler::delete))
        .route(&format!("/ticket{secret}"), get(handler::ticket))
        .route(&format!("/faxorder{secret}"), post(handler::fax_order))
}
