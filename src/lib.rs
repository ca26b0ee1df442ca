//! Car key tracker.
//!
//! Tracks which physical car keys are available and who holds the rest,
//! with a newest-first log of every check-out and check-in. All state is in
//! memory for the life of the process.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
