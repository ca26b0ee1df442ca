//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They own the key inventory, the transaction log and the seed data.

pub mod inventory_service;
pub mod seed;
pub mod transaction_log;
