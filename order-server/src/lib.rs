//! Order Server - 单店点单后端
//!
//! # 架构概述
//!
//! 顾客通过菜单提交订单，店员标记付款或删除订单，并生成厨房小票通过传真下单。
//! 订单存储有两种实现（进程内存 / redb 持久化），对外契约完全一致。
//!
//! # 模块结构
//!
//! ```text
//! order-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── orders/        # 订单存储 (内存 / redb)、编号分配、生命周期
//! ├── pricing/       # 计价与金额格式化
//! ├── catalog/       # 静态菜单与提交解析
//! ├── printing/      # 厨房小票渲染
//! ├── fax/           # 传真发送
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 中间件装配
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod fax;
pub mod orders;
pub mod pricing;
pub mod printing;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use catalog::Catalog;
pub use core::{AppConfig, Config, Server, ServerState};
pub use orders::{MemoryOrderStore, OrderStore, OrdersManager, RedbOrderStore};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 加载 .env 并初始化日志
///
/// 日志级别与格式取自 `LOG_LEVEL` / `LOG_JSON`，文件输出写入 `<WORK_DIR>/logs`
/// (目录存在时)。
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    config.ensure_work_dir_structure()?;

    let log_dir = config.log_dir();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        log_dir.to_str(),
    );

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ____          __
  / __ \_________/ /__  _____
 / / / / ___/ __  / _ \/ ___/
/ /_/ / /  / /_/ /  __/ /
\____/_/   \__,_/\___/_/
    "#
    );
}
