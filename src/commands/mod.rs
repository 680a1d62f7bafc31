//! Catalog Service Bindings
//!
//! Frontend bindings to the backend HTTP API, organized by domain.

mod products;

// Re-export all public items
pub use products::*;
