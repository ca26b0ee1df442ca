//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `RECENT_ACTIVITY_LIMIT` (optional): entries shown by `GET /activity`, defaults to 5
/// - `SEED_INVENTORY` (optional): start with the demo fleet, defaults to true
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_recent_activity_limit")]
    pub recent_activity_limit: usize,

    #[serde(default = "default_seed_inventory")]
    pub seed_inventory: bool,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_recent_activity_limit() -> usize {
    5
}

fn default_seed_inventory() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: default_port(),
            recent_activity_limit: default_recent_activity_limit(),
            seed_inventory: default_seed_inventory(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable value cannot be parsed
    /// into the expected type (e.g. `SERVER_PORT=abc`).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: server_port -> SERVER_PORT
        envy::from_env::<Config>()
    }
}
