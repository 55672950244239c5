//! OrdersManager - order lifecycle on top of an [`OrderStore`]
//!
//! ```text
//! create ──▶ Unpaid ◀──update_payment_status──▶ Paid
//!              │                                 │
//!              └──────────── delete ─────────────┴──▶ Deleted (terminal)
//! ```
//!
//! The manager owns no order state of its own; it logs transitions and
//! derives aggregate figures from a single store snapshot.

use std::sync::Arc;

use shared::models::{Order, OrderDraft, OrderId};

use super::traits::{OrderStore, StoreError, StoreResult};
use crate::pricing;

/// Order lifecycle façade
#[derive(Clone)]
pub struct OrdersManager {
    store: Arc<dyn OrderStore>,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager")
            .field("store", &self.store.name())
            .finish()
    }
}

impl OrdersManager {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Name of the backing store ("memory" / "durable")
    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }

    pub fn create(&self, draft: OrderDraft) -> StoreResult<Order> {
        let order = self.store.create(draft)?;
        tracing::info!(
            order_id = %order.id,
            customer = %order.name,
            lines = order.items.len(),
            total = pricing::calc_price(&order),
            "Order created"
        );
        Ok(order)
    }

    pub fn get(&self, id: &OrderId) -> StoreResult<Order> {
        self.store.get(id).inspect_err(|e| log_miss("get", e))
    }

    /// Current snapshot of live orders
    pub fn list(&self) -> StoreResult<Arc<Vec<Order>>> {
        self.store.list()
    }

    pub fn update_payment_status(&self, id: &OrderId, paid: bool) -> StoreResult<Order> {
        let order = self
            .store
            .update_payment_status(id, paid)
            .inspect_err(|e| log_miss("update_payment_status", e))?;
        tracing::info!(order_id = %id, is_paid = paid, "Payment status updated");
        Ok(order)
    }

    /// Delete an order; `None` when the removed record was unreadable
    pub fn delete(&self, id: &OrderId) -> StoreResult<Option<Order>> {
        let order = self
            .store
            .delete(id)
            .inspect_err(|e| log_miss("delete", e))?;
        match &order {
            Some(order) => {
                tracing::info!(order_id = %id, customer = %order.name, "Order deleted")
            }
            None => tracing::info!(order_id = %id, "Unreadable order record deleted"),
        }
        Ok(order)
    }

    /// Sum of all live orders, computed from one snapshot
    pub fn complete_price(&self) -> StoreResult<i64> {
        Ok(pricing::complete_price(&self.list()?))
    }
}

/// NotFound is an expected outcome (e.g. a concurrent delete won the race)
fn log_miss(operation: &'static str, err: &StoreError) {
    match err {
        StoreError::NotFound(id) => {
            tracing::debug!(operation, order_id = %id, "Order not found");
        }
        other => {
            tracing::warn!(operation, error = %other, "Order store operation failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::{MemoryOrderStore, RedbOrderStore, UniqueTokenAllocator};
    use shared::models::{ExtraOption, OrderLine, SizeOption, SizeTier};

    fn create_test_manager() -> OrdersManager {
        OrdersManager::new(Arc::new(MemoryOrderStore::sequential()))
    }

    fn create_durable_manager() -> OrdersManager {
        let store =
            RedbOrderStore::open_in_memory(Arc::new(UniqueTokenAllocator::new())).unwrap();
        OrdersManager::new(Arc::new(store))
    }

    fn margherita_small() -> OrderDraft {
        OrderDraft {
            name: "Anna".into(),
            items: vec![OrderLine {
                name: "Margherita".into(),
                size: SizeOption::new("small", 650, SizeTier::Small),
                extras: vec![ExtraOption::new("Basil", 50)],
            }],
        }
    }

    fn run_lifecycle(manager: &OrdersManager) {
        let order = manager.create(margherita_small()).unwrap();
        assert_eq!(pricing::calc_price(&order), 700);
        assert_eq!(manager.complete_price().unwrap(), 700);

        let paid = manager.update_payment_status(&order.id, true).unwrap();
        assert!(paid.is_paid);
        assert!(manager.get(&order.id).unwrap().is_paid);

        let other = manager.create(margherita_small()).unwrap();
        assert_eq!(manager.complete_price().unwrap(), 1400);

        manager.delete(&order.id).unwrap();
        assert!(manager.get(&order.id).unwrap_err().is_not_found());
        assert_eq!(manager.complete_price().unwrap(), 700);

        let listed = manager.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, other.id);
    }

    #[test]
    fn test_lifecycle_memory() {
        let manager = create_test_manager();
        assert_eq!(manager.store_name(), "memory");
        run_lifecycle(&manager);
    }

    #[test]
    fn test_lifecycle_durable() {
        let manager = create_durable_manager();
        assert_eq!(manager.store_name(), "durable");
        run_lifecycle(&manager);
    }

    #[test]
    fn test_complete_price_empty() {
        let manager = create_test_manager();
        assert_eq!(manager.complete_price().unwrap(), 0);
    }

    #[test]
    fn test_delete_races_with_update() {
        let manager = create_test_manager();
        let order = manager.create(margherita_small()).unwrap();

        let (deleted, updated) = std::thread::scope(|s| {
            let d = s.spawn(|| manager.delete(&order.id));
            let u = s.spawn(|| manager.update_payment_status(&order.id, true));
            (d.join().unwrap(), u.join().unwrap())
        });

        assert!(deleted.is_ok());
        // Either the update ran first, or it observed the delete
        match updated {
            Ok(o) => assert!(o.is_paid),
            Err(e) => assert!(e.is_not_found()),
        }
        assert!(manager.list().unwrap().is_empty());
    }
}
