//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `VALET_API_URL` - Base URL of the parking API
//!   (e.g., `http://localhost:8080/api`)

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
///
/// One recognized option: the API base URL, which prefixes every resource
/// path the client requests.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Build a configuration from a base URL string.
    ///
    /// The URL is validated and any trailing slash is stripped so resource
    /// paths (which start with `/`) concatenate cleanly.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the value is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("VALET_API_URL".to_string(), e.to_string()))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidEnvVar(
                "VALET_API_URL".to_string(),
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `VALET_API_URL` is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = std::env::var("VALET_API_URL")
            .map_err(|_| ConfigError::MissingEnvVar("VALET_API_URL".to_string()))?;

        Self::new(&base_url)
    }

    /// The validated base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_base_url() {
        let config = ClientConfig::new("http://localhost:8080/api").unwrap();
        assert_eq!(config.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ClientConfig::new("https://parking.example.com/api/").unwrap();
        assert_eq!(config.base_url(), "https://parking.example.com/api");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = ClientConfig::new("not a url");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let result = ClientConfig::new("ftp://parking.example.com");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}
