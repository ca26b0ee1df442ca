//! Car key data models and API request/response types.
//!
//! This module defines:
//! - `CarKey`: a physical key and its live status
//! - `KeyStatus`: availability, carrying the holder while a key is out
//! - `CheckOutRequest`: request body for checking a key out
//! - `CarKeyResponse`: response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current availability of a key.
///
/// The holder only exists inside `InUse`, so a key can never be available
/// while still naming a driver, or be out without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyStatus {
    Available,
    InUse { holder: String },
}

impl KeyStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, KeyStatus::Available)
    }

    pub fn holder(&self) -> Option<&str> {
        match self {
            KeyStatus::Available => None,
            KeyStatus::InUse { holder } => Some(holder),
        }
    }

    /// Wire label, matching the `status` field of `CarKeyResponse`.
    pub fn label(&self) -> &'static str {
        match self {
            KeyStatus::Available => "available",
            KeyStatus::InUse { .. } => "in-use",
        }
    }
}

/// A physical car key tracked by the inventory.
///
/// The set of keys is fixed at startup; only `status` and `last_updated`
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarKey {
    /// Key identifier printed on the tag (e.g. "CK001")
    pub id: String,

    pub car_model: String,

    pub license_plate: String,

    pub status: KeyStatus,

    /// When `status` last changed
    pub last_updated: DateTime<Utc>,
}

impl CarKey {
    pub fn available(
        id: impl Into<String>,
        car_model: impl Into<String>,
        license_plate: impl Into<String>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            car_model: car_model.into(),
            license_plate: license_plate.into(),
            status: KeyStatus::Available,
            last_updated,
        }
    }

    pub fn in_use(
        id: impl Into<String>,
        car_model: impl Into<String>,
        license_plate: impl Into<String>,
        holder: impl Into<String>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            car_model: car_model.into(),
            license_plate: license_plate.into(),
            status: KeyStatus::InUse {
                holder: holder.into(),
            },
            last_updated,
        }
    }

    /// Case-insensitive substring match against id, model, plate and holder.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle)
            || self.car_model.to_lowercase().contains(needle)
            || self.license_plate.to_lowercase().contains(needle)
            || self
                .status
                .holder()
                .is_some_and(|holder| holder.to_lowercase().contains(needle))
    }
}

/// Request body for checking a key out.
///
/// # JSON Example
///
/// ```json
/// {
///   "userName": "Alice Park"
/// }
/// ```
///
/// `user_name` is accepted as well.
#[derive(Debug, Deserialize)]
pub struct CheckOutRequest {
    /// Driver taking the key
    #[serde(alias = "userName")]
    pub user_name: String,
}

/// Response body for key endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "CK002",
///   "car_model": "Honda Civic",
///   "license_plate": "XYZ-789",
///   "status": "in-use",
///   "holder": "John Smith",
///   "last_updated": "2026-10-19T09:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct CarKeyResponse {
    pub id: String,
    pub car_model: String,
    pub license_plate: String,
    pub status: &'static str,

    /// Omitted while the key is available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder: Option<String>,

    pub last_updated: DateTime<Utc>,
}

impl From<&CarKey> for CarKeyResponse {
    fn from(key: &CarKey) -> Self {
        Self {
            id: key.id.clone(),
            car_model: key.car_model.clone(),
            license_plate: key.license_plate.clone(),
            status: key.status.label(),
            holder: key.status.holder().map(str::to_owned),
            last_updated: key.last_updated,
        }
    }
}
