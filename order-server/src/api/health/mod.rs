//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /health | GET | 健康检查 | 无 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "store": "memory",
//!   "orders": 3,
//!   "uptime_seconds": 120
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::SystemTime;

use crate::core::ServerState;

/// 健康检查路由 - 公共路由 (无需认证)
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (ok | degraded)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 存储模式
    store: &'static str,
    /// 当前订单数 (存储不可用时为空)
    #[serde(skip_serializing_if = "Option::is_none")]
    orders: Option<usize>,
    /// 运行时间 (秒)
    uptime_seconds: u64,
}

// 服务器启动时间，由 `Server::run` 记录
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

/// 记录启动时间 (只有第一次调用生效)
pub fn mark_started() {
    START_TIME.get_or_init(SystemTime::now);
}

fn get_uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let orders = match state.orders.list() {
        Ok(orders) => Some(orders.len()),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: order store unavailable");
            None
        }
    };

    Json(HealthResponse {
        status: if orders.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        store: state.orders.store_name(),
        orders,
        uptime_seconds: get_uptime_seconds(),
    })
}
