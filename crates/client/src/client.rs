//! Thin HTTP accessor for the parking API.
//!
//! Owns transport concerns only: a base URL prefixing every resource path,
//! and the five verbs the API uses. No retries, no auth, no timeout
//! override - those belong to the server side of the contract.

use std::sync::Arc;

use thiserror::Error;

use crate::config::ClientConfig;

/// Errors that can occur when talking to the parking API.
///
/// The taxonomy mirrors what a caller can meaningfully distinguish:
/// transport failure, HTTP error status, and response decode failure.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (network unreachable, connection reset, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Parking API client.
///
/// Cheap to clone; all clones share one connection pool. Every resource
/// path is prefixed with the configured base URL.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.base_url().to_owned(),
            }),
        })
    }

    /// The configured base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Execute a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.inner.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Execute a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + Sync + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(%url, "GET (query)");
        let response = self.inner.client.get(&url).query(query).send().await?;
        self.handle_response(response).await
    }

    /// Execute a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + Sync + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.inner.client.post(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Execute a PUT request with a JSON body.
    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + Sync + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        let response = self.inner.client.put(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Execute a PATCH request with a JSON body.
    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + Sync + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(%url, "PATCH");
        let response = self.inner.client.patch(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Execute a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let response = self.inner.client.delete(&url).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(Self::parse_error(response).await)
    }

    /// Handle API response and parse JSON.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(Self::parse_error(response).await)
    }

    /// Parse an error response.
    async fn parse_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        if status == 404 {
            return ApiError::NotFound("Resource not found".to_string());
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        ApiError::Api { status, message }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 500 - boom");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = ApiError::NotFound("booking 3".to_string());
        assert_eq!(err.to_string(), "Not found: booking 3");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ApiError::Parse("unexpected end of input".to_string());
        assert_eq!(err.to_string(), "Parse error: unexpected end of input");
    }

    #[test]
    fn test_url_prefixes_base() {
        let config = ClientConfig::new("http://localhost:8080/api").unwrap();
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(
            client.url("/car-owner/all"),
            "http://localhost:8080/api/car-owner/all"
        );
    }
}
