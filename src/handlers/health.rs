//! Health check endpoint for service monitoring.

use crate::state::AppState;
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
///
/// Returns service status and the size of the in-memory inventory.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Number of keys tracked
    pub keys: usize,

    /// Number of log entries
    pub transactions: usize,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "keys": 8,
///   "transactions": 3,
///   "timestamp": "2026-10-19T19:00:00Z"
/// }
/// ```
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let inventory = state.inventory.read().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        keys: inventory.keys().len(),
        transactions: inventory.log().len(),
        timestamp: Utc::now(),
    })
}
