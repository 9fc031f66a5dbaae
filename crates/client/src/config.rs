//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_SERVICE_URL` - Base URL of the cart service (default: <http://localhost:8081>)

use thiserror::Error;
use url::Url;

/// Default listen address of the cart service when run locally.
const DEFAULT_CART_SERVICE_URL: &str = "http://localhost:8081";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart service client configuration.
#[derive(Debug, Clone)]
pub struct CartServiceConfig {
    /// Base URL of the upstream cart service, without a trailing slash.
    pub base_url: String,
}

impl CartServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CART_SERVICE_URL` is set but not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw = std::env::var("CART_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_CART_SERVICE_URL.to_string());
        Self::from_base_url(&raw)
    }

    /// Build a configuration from an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL does not parse.
    pub fn from_base_url(raw: &str) -> Result<Self, ConfigError> {
        Url::parse(raw)
            .map_err(|e| ConfigError::InvalidEnvVar("CART_SERVICE_URL".to_string(), e.to_string()))?;

        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }
}
