//! 核心模块 - 服务器配置、状态和错误定义
//!
//! # 模块结构
//!
//! - [`Config`] - 进程配置 (环境变量)
//! - [`AppConfig`] - 店铺配置 (config.json)
//! - [`ServerState`] - 服务器状态
//! - [`Server`] - HTTP 服务器
//! - [`ServerError`] - 服务器错误

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{AppConfig, Config, ConfigError, IdStrategy, StoreMode};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
