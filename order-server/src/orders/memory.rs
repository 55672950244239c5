//! In-process order store
//!
//! A single coarse lock guards an `Arc<Vec<Order>>`. Writers copy-on-write
//! through [`Arc::make_mut`], so a reader that cloned the `Arc` keeps an
//! immutable snapshot and never blocks anyone after the clone.

use std::sync::Arc;

use parking_lot::Mutex;
use shared::models::{Order, OrderDraft, OrderId};
use shared::util::now_millis;

use super::allocator::{IdentityAllocator, SequentialAllocator};
use super::traits::{OrderStore, StoreError, StoreResult};

/// Ephemeral order store (contents are lost on restart)
pub struct MemoryOrderStore {
    orders: Mutex<Arc<Vec<Order>>>,
    allocator: Arc<dyn IdentityAllocator>,
}

impl MemoryOrderStore {
    pub fn new(allocator: Arc<dyn IdentityAllocator>) -> Self {
        Self {
            orders: Mutex::new(Arc::new(Vec::new())),
            allocator,
        }
    }

    /// Sequential ids starting at 1
    pub fn sequential() -> Self {
        Self::new(Arc::new(SequentialAllocator::new()))
    }

    fn snapshot(&self) -> Arc<Vec<Order>> {
        Arc::clone(&self.orders.lock())
    }

    fn position(orders: &[Order], id: &OrderId) -> StoreResult<usize> {
        orders
            .iter()
            .position(|o| &o.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}

impl Default for MemoryOrderStore {
    fn default() -> Self {
        Self::sequential()
    }
}

impl OrderStore for MemoryOrderStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn create(&self, draft: OrderDraft) -> StoreResult<Order> {
        let mut guard = self.orders.lock();
        // Allocation happens under the lock so ids follow insertion order
        let id = self.allocator.next_id()?;
        let order = Order::from_draft(id, draft, now_millis());
        Arc::make_mut(&mut *guard).push(order.clone());
        Ok(order)
    }

    fn get(&self, id: &OrderId) -> StoreResult<Order> {
        let snapshot = self.snapshot();
        let pos = Self::position(&snapshot, id)?;
        Ok(snapshot[pos].clone())
    }

    fn list(&self) -> StoreResult<Arc<Vec<Order>>> {
        Ok(self.snapshot())
    }

    fn update_payment_status(&self, id: &OrderId, paid: bool) -> StoreResult<Order> {
        let mut guard = self.orders.lock();
        let pos = Self::position(&guard, id)?;
        if guard[pos].is_paid != paid {
            Arc::make_mut(&mut *guard)[pos].is_paid = paid;
        }
        Ok(guard[pos].clone())
    }

    fn delete(&self, id: &OrderId) -> StoreResult<Option<Order>> {
        let mut guard = self.orders.lock();
        let pos = Self::position(&guard, id)?;
        // Vec::remove keeps the remaining orders in their original sequence
        Ok(Some(Arc::make_mut(&mut *guard).remove(pos)))
    }
}
