//! mindbalance-core
//!
//! Assessment records, usage statistics and the in-memory record store.
//! Knows nothing about how scales are scored; records carry the verdict
//! they were saved with.

pub mod error;
pub mod models;
pub mod stats;
pub mod store;
