//! Pricing Module
//!
//! Pure functions over order data; no store access, no locks.

mod calculator;
mod format;

pub use calculator::*;
pub use format::*;
