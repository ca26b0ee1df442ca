//! Car key HTTP handlers.
//!
//! This module implements the key-related API endpoints:
//! - GET /keys?search=<text> - List keys with summary counts
//! - GET /keys/:id - Get one key
//! - GET /keys/:id/transactions - History of one key
//! - POST /keys/:id/checkout - Hand a key to a driver
//! - POST /keys/:id/checkin - Return a key

use crate::{
    error::AppError,
    models::{
        car_key::{CarKeyResponse, CheckOutRequest},
        summary::{KeyListResponse, KeySearchQuery},
        transaction::Transaction,
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use chrono::Utc;

/// List keys matching an optional free-text search.
///
/// # Query Parameters
///
/// - `search` - matched case-insensitively against id, model, plate and holder
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "keys": [
///     {
///       "id": "CK002",
///       "car_model": "Honda Civic",
///       "license_plate": "XYZ-789",
///       "status": "in-use",
///       "holder": "John Smith",
///       "last_updated": "2026-10-19T09:00:00Z"
///     }
///   ],
///   "summary": { "available": 5, "in_use": 3, "total_keys": 8, "total_transactions": 3 }
/// }
/// ```
///
/// The summary always covers the whole inventory, not just the filtered keys.
/// A malformed query string (e.g. `search` given twice) returns 400.
pub async fn list_keys(
    State(state): State<AppState>,
    query: Result<Query<KeySearchQuery>, QueryRejection>,
) -> Result<Json<KeyListResponse>, AppError> {
    let Query(query) = query?;

    let inventory = state.inventory.read().await;

    let keys = inventory
        .search(&query.search)
        .into_iter()
        .map(CarKeyResponse::from)
        .collect();

    Ok(Json(KeyListResponse {
        keys,
        summary: inventory.summary(),
    }))
}

/// Get a single key by id.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the key
/// - **Error (404)**: Unknown key id
pub async fn get_key(
    State(state): State<AppState>,
    Path(key_id): Path<String>,
) -> Result<Json<CarKeyResponse>, AppError> {
    let inventory = state.inventory.read().await;
    let key = inventory
        .get(&key_id)
        .ok_or_else(|| AppError::KeyNotFound(key_id.clone()))?;

    Ok(Json(key.into()))
}

/// History of one key, newest first.
pub async fn key_history(
    State(state): State<AppState>,
    Path(key_id): Path<String>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let inventory = state.inventory.read().await;
    Ok(Json(inventory.history(&key_id)?))
}

/// Check a key out to a driver.
///
/// # Request Body
///
/// ```json
/// {
///   "userName": "Alice Park"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: Returns the updated key
/// - **Error (404)**: Unknown key id
/// - **Error (400)**: Body is not valid JSON or lacks `userName`
/// - **Error (409)**: Key already in use, or driver name blank
pub async fn check_out(
    State(state): State<AppState>,
    Path(key_id): Path<String>,
    request: Result<Json<CheckOutRequest>, JsonRejection>,
) -> Result<Json<CarKeyResponse>, AppError> {
    let Json(request) = request?;

    let mut inventory = state.inventory.write().await;
    let (key, _) = inventory.check_out(&key_id, &request.user_name, Utc::now())?;

    Ok(Json((&key).into()))
}

/// Return a key.
///
/// The check-in transaction is attributed to the driver who held the key.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the updated key
/// - **Error (404)**: Unknown key id
/// - **Error (409)**: Key is not checked out
pub async fn check_in(
    State(state): State<AppState>,
    Path(key_id): Path<String>,
) -> Result<Json<CarKeyResponse>, AppError> {
    let mut inventory = state.inventory.write().await;
    let (key, _) = inventory.check_in(&key_id, Utc::now())?;

    Ok(Json((&key).into()))
}
