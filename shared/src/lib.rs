//! Shared types for the storefront order server
//!
//! Menu and order models, request bodies, the unified error system and the
//! API response envelope.

pub mod error;
pub mod models;
pub mod request;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
