//! Summary counts and key listing types.

use serde::{Deserialize, Serialize};

use super::car_key::CarKeyResponse;

/// Availability counts shown above the key list.
///
/// Always computed from the live inventory and log, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub available: usize,
    pub in_use: usize,
    pub total_keys: usize,
    pub total_transactions: usize,
}

/// Query string for `GET /keys`.
#[derive(Debug, Default, Deserialize)]
pub struct KeySearchQuery {
    /// Free-text filter; absent or empty returns every key.
    #[serde(default)]
    pub search: String,
}

/// Response body for `GET /keys`.
///
/// # JSON Example
///
/// ```json
/// {
///   "keys": [ { "id": "CK002", "car_model": "Honda Civic", "...": "..." } ],
///   "summary": { "available": 5, "in_use": 3, "total_keys": 8, "total_transactions": 3 }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct KeyListResponse {
    pub keys: Vec<CarKeyResponse>,
    pub summary: Summary,
}
