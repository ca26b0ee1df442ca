//! HTTP router assembly.
//!
//! `main` and the black-box tests build the exact same router from here.

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, state::AppState};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Public health check
        .route("/health", get(handlers::health::health_check))
        // Key routes
        .route("/keys", get(handlers::keys::list_keys))
        .route("/keys/{id}", get(handlers::keys::get_key))
        .route(
            "/keys/{id}/transactions",
            get(handlers::keys::key_history),
        )
        .route("/keys/{id}/checkout", post(handlers::keys::check_out))
        .route("/keys/{id}/checkin", post(handlers::keys::check_in))
        // Transaction log routes
        .route(
            "/transactions",
            get(handlers::transactions::list_transactions),
        )
        .route("/activity", get(handlers::transactions::recent_activity))
        .route("/summary", get(handlers::transactions::summary))
        .layer(
            ServiceBuilder::new()
                // Request spans for observability
                .layer(TraceLayer::new_for_http())
                // The browser client is served from another origin
                .layer(CorsLayer::permissive()),
        )
        // Share the inventory with all handlers via State extraction
        .with_state(state)
}
