//! Order store contract
//!
//! Both store variants implement [`OrderStore`]; everything above the store
//! (manager, HTTP handlers, ticket rendering) is written against the trait.

use std::sync::Arc;

use shared::error::AppError;
use shared::models::{Order, OrderDraft, OrderId};
use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Referenced order does not exist (or was deleted). A normal outcome.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    #[error("Order id space exhausted")]
    IdentityExhausted,

    /// Backing store failed; the operation had no effect
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::order_not_found(id.as_str()),
            StoreError::IdentityExhausted => {
                AppError::new(shared::error::ErrorCode::IdentityExhausted)
            }
            StoreError::Unavailable(msg) => AppError::store_unavailable(msg),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Result of a full scan that tolerates undecodable records
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Orders that decoded cleanly, in listing order
    pub orders: Vec<Order>,
    /// Records that were skipped
    pub corrupt: usize,
}

impl ScanOutcome {
    pub fn is_degraded(&self) -> bool {
        self.corrupt > 0
    }
}

/// Order store
///
/// | Operation | Success | Failure |
/// |-----------|---------|---------|
/// | `create` | stored order (fresh id, unpaid) | `IdentityExhausted`, `Unavailable` |
/// | `get` | order | `NotFound` |
/// | `list` | every live order exactly once | `Unavailable` |
/// | `update_payment_status` | updated order (idempotent) | `NotFound`, `Unavailable` |
/// | `delete` | removed order (`None` if its record was unreadable) | `NotFound`, `Unavailable` |
pub trait OrderStore: Send + Sync {
    /// Short name for logs and health output
    fn name(&self) -> &'static str;

    fn create(&self, draft: OrderDraft) -> StoreResult<Order>;

    fn get(&self, id: &OrderId) -> StoreResult<Order>;

    /// Snapshot of all live orders
    ///
    /// The returned list is never mutated afterwards; callers may hold it
    /// for as long as they like without blocking writers.
    fn list(&self) -> StoreResult<Arc<Vec<Order>>>;

    fn update_payment_status(&self, id: &OrderId, paid: bool) -> StoreResult<Order>;

    /// Remove an order
    ///
    /// The key is removed even when the stored record cannot be decoded; the
    /// removed order is then `None`.
    fn delete(&self, id: &OrderId) -> StoreResult<Option<Order>>;
}
