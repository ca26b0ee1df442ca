//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, query string)
//! 2. Locks the shared inventory and runs the operation
//! 3. Returns HTTP response (JSON, status code)

/// Health check endpoint
pub mod health;
/// Key listing, check-out and check-in endpoints
pub mod keys;
/// Transaction log endpoints
pub mod transactions;
