//! Data models
//!
//! Shared between the order server and its clients (via API).
//! Prices are `i64` cents throughout.

pub mod menu;
pub mod order;

// Re-exports
pub use menu::*;
pub use order::*;
