//! mindbalance-export
//!
//! Interpretation text, CSV and JSON exports of a user's history.

pub mod bundle;
pub mod csv;
pub mod error;
pub mod interpret;
pub mod readings;
