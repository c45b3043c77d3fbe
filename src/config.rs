//! Application configuration loaded from environment variables.
//!
//! Everything here is non-sensitive except the sports API key, which the
//! upstream hands out per-app; it is read from the environment like the rest.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Deployment environment tag (reported by /health)
    pub environment: String,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// GCP project ID for Firestore
    pub gcp_project_id: String,
    /// TheSportsDB base URL (without the key segment)
    pub sports_api_base_url: String,
    /// TheSportsDB API key (path segment)
    pub sports_api_key: String,
    /// League queried by the default upcoming-matches endpoint
    pub upcoming_league_id: String,
    /// Expo push gateway endpoint
    pub push_gateway_url: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            environment: "test".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            gcp_project_id: "test-project".to_string(),
            sports_api_base_url: "https://www.thesportsdb.com/api/v1/json".to_string(),
            sports_api_key: "3".to_string(),
            upcoming_league_id: "4328".to_string(),
            push_gateway_url: "https://exp.host/--/api/v2/push/send".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            environment: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            sports_api_base_url: env::var("SPORTS_API_BASE_URL")
                .unwrap_or_else(|_| "https://www.thesportsdb.com/api/v1/json".to_string()),
            sports_api_key: env::var("SPORTS_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("SPORTS_API_KEY"))?,
            upcoming_league_id: env::var("UPCOMING_LEAGUE_ID")
                .unwrap_or_else(|_| "4328".to_string()),
            push_gateway_url: env::var("PUSH_GATEWAY_URL")
                .unwrap_or_else(|_| "https://exp.host/--/api/v2/push/send".to_string()),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
