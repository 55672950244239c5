//! Orders Module
//!
//! Order lifecycle and the two interchangeable store variants:
//!
//! - [`MemoryOrderStore`] - process-local, coarse lock + copy-on-write snapshots
//! - [`RedbOrderStore`] - durable, one redb write transaction per mutation
//!
//! Ids come from an [`IdentityAllocator`] chosen at startup.

pub mod allocator;
pub mod manager;
pub mod memory;
pub mod storage;
pub mod traits;

pub use allocator::{IdentityAllocator, SequentialAllocator, UniqueTokenAllocator};
pub use manager::OrdersManager;
pub use memory::MemoryOrderStore;
pub use storage::{RedbOrderStore, StorageError};
pub use traits::{OrderStore, ScanOutcome, StoreError, StoreResult};
