//! Client configuration loaded from environment variables.

use std::env;

/// Configuration for the client layer, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the carpool backend API.
    pub api_base_url: String,
    /// Maximum number of entries kept in the user-identity cache.
    pub user_cache_capacity: usize,
    /// Time-to-live for user-identity cache entries, in seconds.
    pub user_cache_ttl_secs: u64,
}

impl Default for Config {
    /// Default config for local development and tests.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            user_cache_capacity: 512,
            user_cache_ttl_secs: 300,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a local-development default, so this never fails.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            api_base_url: env::var("RIDEPOOL_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".to_string()),
            user_cache_capacity: env::var("RIDEPOOL_USER_CACHE_CAP")
                .unwrap_or_else(|_| "512".to_string())
                .parse()
                .unwrap_or(512),
            user_cache_ttl_secs: env::var("RIDEPOOL_USER_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap_or(300),
        }
    }
}
