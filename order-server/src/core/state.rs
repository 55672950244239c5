use std::sync::Arc;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::core::{AppConfig, Config, IdStrategy, Result, StoreMode};
use crate::fax::{FaxDispatcher, SipgateFaxDispatcher};
use crate::orders::{
    IdentityAllocator, MemoryOrderStore, OrderStore, OrdersManager, RedbOrderStore,
    SequentialAllocator, StoreError, UniqueTokenAllocator,
};
use crate::printing::{KitchenTicketRenderer, PdfTicketRenderer, TicketRenderer};

/// 服务器状态 - 持有所有服务的单例引用
///
/// 启动时构建一次，通过 axum `State` 传给处理器。使用 Arc 实现浅拷贝。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 进程配置 (不可变) |
/// | app_config | Arc<AppConfig> | 店铺配置 (不可变) |
/// | catalog | Arc<Catalog> | 菜单 |
/// | orders | Arc<OrdersManager> | 订单生命周期 |
/// | preview_renderer | Arc<dyn TicketRenderer> | 小票预览 (文本) |
/// | fax_renderer | Arc<dyn TicketRenderer> | 传真小票 (PDF) |
/// | fax | Arc<dyn FaxDispatcher> | 传真发送 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 店铺配置 (传真账号、secret)
    pub app_config: Arc<AppConfig>,
    pub catalog: Arc<Catalog>,
    pub orders: Arc<OrdersManager>,
    /// `/ticket` 预览
    pub preview_renderer: Arc<dyn TicketRenderer>,
    /// 传真文档
    pub fax_renderer: Arc<dyn TicketRenderer>,
    pub fax: Arc<dyn FaxDispatcher>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("app_config", &self.app_config)
            .field("orders", &self.orders)
            .finish_non_exhaustive()
    }
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize)；测试里用来注入替身服务
    pub fn new(
        config: Config,
        app_config: AppConfig,
        catalog: Catalog,
        orders: OrdersManager,
        preview_renderer: Arc<dyn TicketRenderer>,
        fax_renderer: Arc<dyn TicketRenderer>,
        fax: Arc<dyn FaxDispatcher>,
    ) -> Self {
        Self {
            config,
            app_config: Arc::new(app_config),
            catalog: Arc::new(catalog),
            orders: Arc::new(orders),
            preview_renderer,
            fax_renderer,
            fax,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 配置校验与店铺配置 (config.json)
    /// 2. 工作目录结构
    /// 3. 订单存储 (内存或 work_dir/database/orders.redb)
    /// 4. 菜单、小票渲染、传真
    ///
    /// 任何一步失败都是致命错误，由调用方退出进程。
    pub fn initialize(config: &Config) -> Result<Self> {
        // 1. Configuration
        config.validate()?;
        let app_config = AppConfig::load(&config.app_config_path)?;

        // 2. Work dir
        config.ensure_work_dir_structure()?;

        // 3. Order store
        let store = build_store(config)?;
        tracing::info!(
            store = store.name(),
            ids = %config.id_strategy,
            "Order store ready"
        );
        let orders = OrdersManager::new(store);

        // 4. Services
        let catalog = Catalog::standard(config.catalog_markup_percent);
        tracing::info!(
            items = catalog.items().len(),
            markup_percent = catalog.markup_percent(),
            "Menu loaded"
        );
        let layout = KitchenTicketRenderer::default()
            .with_address(app_config.address.clone())
            .with_remark(app_config.remark.clone());
        let fax_renderer = PdfTicketRenderer::new(layout.clone());
        let fax = SipgateFaxDispatcher::new(
            config.fax_endpoint.clone(),
            config.fax_line_id.clone(),
            app_config.username.clone(),
            app_config.password.clone(),
            Duration::from_millis(config.fax_timeout_ms),
        )
        .map_err(|e| anyhow::anyhow!("Failed to build fax client: {e}"))?;

        Ok(Self::new(
            config.clone(),
            app_config,
            catalog,
            orders,
            Arc::new(layout),
            Arc::new(fax_renderer),
            Arc::new(fax),
        ))
    }

    /// Admin route suffix
    pub fn secret(&self) -> &str {
        &self.app_config.secret
    }
}

fn build_allocator(strategy: IdStrategy) -> Arc<dyn IdentityAllocator> {
    match strategy {
        IdStrategy::Sequential => Arc::new(SequentialAllocator::new()),
        IdStrategy::Token => Arc::new(UniqueTokenAllocator::new()),
    }
}

fn build_store(config: &Config) -> Result<Arc<dyn OrderStore>> {
    let allocator = build_allocator(config.id_strategy);
    let store: Arc<dyn OrderStore> = match config.store_mode {
        StoreMode::Memory => Arc::new(MemoryOrderStore::new(allocator)),
        StoreMode::Durable => {
            let path = config.database_path();
            let store = RedbOrderStore::open(&path, allocator).map_err(StoreError::from)?;
            tracing::info!(path = %path.display(), "Opened order database");
            Arc::new(store)
        }
    };
    Ok(store)
}
