//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: one recorded check-out or check-in
//! - `TransactionAction`: which of the two happened
//! - `TransactionQuery`: query string for listing the log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which way a key moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionAction {
    /// Available -> InUse
    CheckOut,
    /// InUse -> Available
    CheckIn,
}

/// Represents one entry of the transaction log.
///
/// Transactions are created only by the log itself and are never modified
/// or removed afterwards.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "T004",
///   "key_id": "CK001",
///   "action": "check-out",
///   "user": "Alice Park",
///   "timestamp": "2026-10-19T10:15:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Log-assigned identifier (`T001`, `T002`, ...)
    pub id: String,

    /// Key that moved
    pub key_id: String,

    pub action: TransactionAction,

    /// Driver taking the key, or the outgoing holder on check-in
    pub user: String,

    pub timestamp: DateTime<Utc>,
}

/// Query string for `GET /transactions`.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionQuery {
    /// Maximum number of entries, newest first. Absent means the whole log.
    pub limit: Option<usize>,
}
