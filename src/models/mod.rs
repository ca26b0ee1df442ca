//! Data models for keys, transactions and the summary view.
//!
//! This module contains the in-memory entities and their API shapes.

/// Car key model
pub mod car_key;
/// Inventory summary and search query
pub mod summary;
/// Check-out/check-in transaction model
pub mod transaction;
