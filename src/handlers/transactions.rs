//! Transaction log HTTP handlers.
//!
//! This module implements the read-only log endpoints:
//! - GET /transactions?limit=<n> - Log entries, newest first
//! - GET /activity - Recent activity view
//! - GET /summary - Availability counts

use crate::{
    error::AppError,
    models::{
        summary::Summary,
        transaction::{Transaction, TransactionQuery},
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

/// List the transaction log, newest first.
///
/// # Query Parameters
///
/// - `limit` (optional) - maximum number of entries; the whole log if absent
///
/// A `limit` that is not a non-negative integer returns 400.
///
/// # Response (200 OK)
///
/// ```json
/// [
///   {
///     "id": "T004",
///     "key_id": "CK001",
///     "action": "check-out",
///     "user": "Alice Park",
///     "timestamp": "2026-10-19T10:15:00Z"
///   }
/// ]
/// ```
pub async fn list_transactions(
    State(state): State<AppState>,
    query: Result<Query<TransactionQuery>, QueryRejection>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let Query(query) = query?;

    let inventory = state.inventory.read().await;
    let limit = query.limit.unwrap_or_else(|| inventory.log().len());

    Ok(Json(inventory.recent_activity(limit)))
}

/// Recent activity: the first few log entries, newest first.
///
/// The number of entries comes from `RECENT_ACTIVITY_LIMIT`.
pub async fn recent_activity(State(state): State<AppState>) -> Json<Vec<Transaction>> {
    let inventory = state.inventory.read().await;
    Json(inventory.recent_activity(state.recent_activity_limit))
}

/// Availability counts for the whole inventory.
pub async fn summary(State(state): State<AppState>) -> Json<Summary> {
    let inventory = state.inventory.read().await;
    Json(inventory.summary())
}
