//! 订单编号分配
//!
//! - [`SequentialAllocator`]: 从 1 开始递增，进程内唯一 (内存存储)
//! - [`UniqueTokenAllocator`]: UUID v4，跨进程唯一 (持久化存储)

use std::sync::atomic::{AtomicU64, Ordering};

use shared::models::OrderId;
use uuid::Uuid;

use super::traits::{StoreError, StoreResult};

/// 编号分配器
///
/// 每次 create 调用一次；分配过的编号永不复用，调用不会阻塞。
pub trait IdentityAllocator: Send + Sync {
    fn next_id(&self) -> StoreResult<OrderId>;

    fn name(&self) -> &'static str;
}

/// 顺序编号
#[derive(Debug)]
pub struct SequentialAllocator {
    next: AtomicU64,
}

impl SequentialAllocator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityAllocator for SequentialAllocator {
    fn next_id(&self) -> StoreResult<OrderId> {
        // u64::MAX 本身不发出，作为耗尽哨兵
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .map(OrderId::from)
            .map_err(|_| StoreError::IdentityExhausted)
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}

/// 随机令牌编号 (32 位十六进制)
#[derive(Debug, Default)]
pub struct UniqueTokenAllocator;

impl UniqueTokenAllocator {
    pub fn new() -> Self {
        Self
    }
}

impl IdentityAllocator for UniqueTokenAllocator {
    fn next_id(&self) -> StoreResult<OrderId> {
        Ok(OrderId::new(Uuid::new_v4().simple().to_string()))
    }

    fn name(&self) -> &'static str {
        "token"
    }
}
