//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SAZON_API_BASE_URL` - Base URL of the meal-planning API
//!   (default: `http://localhost:3000/api`)
//! - `SAZON_HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 30)

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default API base URL for local development.
const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the meal-planning API.
    pub base_url: Url,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = std::env::var("SAZON_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let base_url = Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("SAZON_API_BASE_URL".to_owned(), e.to_string())
        })?;

        let timeout = match std::env::var("SAZON_HTTP_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar(
                        "SAZON_HTTP_TIMEOUT_SECS".to_owned(),
                        format!("expected an integer, got {raw:?}"),
                    )
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self { base_url, timeout })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            // The constant is a valid URL; parsing it cannot fail.
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
