//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`menu`] - 菜单
//! - [`orders`] - 顾客下单、订单查询
//! - [`admin`] - 付款、删除、小票、传真 (路径带 secret)

pub mod extract;
pub mod views;

pub mod admin;
pub mod health;
pub mod menu;
pub mod orders;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppResult};
