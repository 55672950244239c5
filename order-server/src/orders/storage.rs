//! redb-based durable order store
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `orders` | `order_id` | JSON-serialized `Order` | One record per live order |
//!
//! # Durability
//!
//! Every create / payment update / delete is exactly one write transaction.
//! redb commits with `Durability::Immediate` by default, so a mutation that
//! returned `Ok` survives a crash. There are no cross-order transactions.
//!
//! # Listing
//!
//! `list` runs a single read transaction over the table. Records that fail to
//! decode are logged and skipped; the rest of the scan continues. Results are
//! sorted by `(created_at, id)` so the listing order is stable.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::models::{Order, OrderDraft, OrderId};
use shared::util::now_millis;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use super::allocator::IdentityAllocator;
use super::traits::{OrderStore, ScanOutcome, StoreError, StoreResult};

/// Table for storing orders: key = order_id, value = JSON-serialized Order
const ORDERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("orders");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Duplicate order id: {0}")]
    DuplicateId(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

/// Durable order store backed by redb
#[derive(Clone)]
pub struct RedbOrderStore {
    db: Arc<Database>,
    allocator: Arc<dyn IdentityAllocator>,
}

impl RedbOrderStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>, allocator: Arc<dyn IdentityAllocator>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db, allocator)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory(allocator: Arc<dyn IdentityAllocator>) -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db, allocator)
    }

    fn init(db: Database, allocator: Arc<dyn IdentityAllocator>) -> StorageResult<Self> {
        // Initialize tables
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ORDERS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(db),
            allocator,
        })
    }

    /// Full scan, skipping records that cannot be decoded
    pub fn scan(&self) -> StorageResult<ScanOutcome> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        let mut outcome = ScanOutcome::default();
        for entry in table.iter()? {
            let (key, value) = match entry {
                Ok(kv) => kv,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unreadable order record");
                    outcome.corrupt += 1;
                    continue;
                }
            };
            match serde_json::from_slice::<Order>(value.value()) {
                Ok(order) => outcome.orders.push(order),
                Err(e) => {
                    tracing::warn!(
                        order_id = %key.value(),
                        error = %e,
                        "Skipping undecodable order record"
                    );
                    outcome.corrupt += 1;
                }
            }
        }

        outcome
            .orders
            .sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        Ok(outcome)
    }

    fn insert_new(&self, order: &Order) -> StorageResult<()> {
        let value = serde_json::to_vec(order)?;
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(ORDERS_TABLE)?;
            if table.get(order.id.as_str())?.is_some() {
                return Err(StorageError::DuplicateId(order.id.to_string()));
            }
            table.insert(order.id.as_str(), value.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    fn load(&self, id: &OrderId) -> StorageResult<Option<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;
        match table.get(id.as_str())? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    fn set_paid(&self, id: &OrderId, paid: bool) -> StorageResult<Option<Order>> {
        let txn = self.db.begin_write()?;
        let order = {
            let mut table = txn.open_table(ORDERS_TABLE)?;
            let existing = table.get(id.as_str())?.map(|guard| guard.value().to_vec());
            let Some(bytes) = existing else {
                return Ok(None);
            };

            let mut order: Order = serde_json::from_slice(&bytes)?;
            if order.is_paid != paid {
                order.is_paid = paid;
                let value = serde_json::to_vec(&order)?;
                table.insert(id.as_str(), value.as_slice())?;
            }
            order
        };
        txn.commit()?;
        Ok(Some(order))
    }

    /// Remove the record; the outer `None` means the key did not exist
    ///
    /// Removal never depends on the stored value, so records that `scan`
    /// reports as corrupt can still be deleted.
    fn remove(&self, id: &OrderId) -> StorageResult<Option<Option<Order>>> {
        let txn = self.db.begin_write()?;
        let removed = {
            let mut table = txn.open_table(ORDERS_TABLE)?;
            table.remove(id.as_str())?.map(|guard| guard.value().to_vec())
        };
        let Some(bytes) = removed else {
            return Ok(None);
        };
        txn.commit()?;

        match serde_json::from_slice::<Order>(&bytes) {
            Ok(order) => Ok(Some(Some(order))),
            Err(e) => {
                tracing::warn!(
                    order_id = %id,
                    error = %e,
                    "Removed undecodable order record"
                );
                Ok(Some(None))
            }
        }
    }
}

impl OrderStore for RedbOrderStore {
    fn name(&self) -> &'static str {
        "durable"
    }

    fn create(&self, draft: OrderDraft) -> StoreResult<Order> {
        let id = self.allocator.next_id()?;
        let order = Order::from_draft(id, draft, now_millis());
        self.insert_new(&order)?;
        Ok(order)
    }

    fn get(&self, id: &OrderId) -> StoreResult<Order> {
        self.load(id)?
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn list(&self) -> StoreResult<Arc<Vec<Order>>> {
        let outcome = self.scan()?;
        if outcome.is_degraded() {
            tracing::warn!(
                skipped = outcome.corrupt,
                returned = outcome.orders.len(),
                "Order listing is partial"
            );
        }
        Ok(Arc::new(outcome.orders))
    }

    fn update_payment_status(&self, id: &OrderId, paid: bool) -> StoreResult<Order> {
        self.set_paid(id, paid)?
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn delete(&self, id: &OrderId) -> StoreResult<Option<Order>> {
        self.remove(id)?
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}
