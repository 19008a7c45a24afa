//! Error types for the Trading212 client library.

use thiserror::Error;

/// The main error type for all Trading212 client operations.
#[derive(Error, Debug)]
pub enum Trading212Error {
    /// Client configuration is invalid (e.g. missing or empty API key)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Trading212 API returned a non-success HTTP status
    #[error("Trading212 API error: {0}")]
    Api(ApiError),

    /// Response body could not be decoded into the expected type
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl Trading212Error {
    /// Check if this error is a network-level failure (connection or timeout).
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Trading212Error::Http(_) | Trading212Error::HttpMiddleware(_)
        )
    }

    /// Check if this error is a request timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Trading212Error::Http(e) => e.is_timeout(),
            Trading212Error::HttpMiddleware(reqwest_middleware::Error::Reqwest(e)) => {
                e.is_timeout()
            }
            _ => false,
        }
    }
}

/// An error response from the Trading212 API.
///
/// Carries the HTTP status code and the raw response body so callers can
/// inspect whatever the API returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code returned by the API
    pub status: u16,
    /// Raw response body, usually JSON with an `errorMessage` field
    pub body: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(message) => write!(f, "HTTP {}: {}", self.status, message),
            None => write!(f, "HTTP {}: {}", self.status, self.body),
        }
    }
}

impl ApiError {
    /// Create a new API error from a status code and response body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Extract the `errorMessage` field from a JSON error body, if present.
    ///
    /// Trading212 error bodies are usually of the form
    /// `{"errorMessage": "..."}`, but not every endpoint follows it.
    pub fn message(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.body).ok()?;
        value
            .get("errorMessage")
            .and_then(|m| m.as_str())
            .map(ToOwned::to_owned)
    }

    /// Check if the API rejected the request due to a bad or missing key.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Check if the key lacks the scope required by the endpoint.
    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }

    /// Check if the requested entity does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if the API throttled the request.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }

    /// Check if the failure was on Trading212's side.
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_from_json_body() {
        let error = ApiError::new(400, r#"{"errorMessage": "Invalid ticker"}"#);
        assert_eq!(error.message().as_deref(), Some("Invalid ticker"));
        assert_eq!(error.to_string(), "HTTP 400: Invalid ticker");
    }

    #[test]
    fn test_api_error_display_raw_body() {
        let error = ApiError::new(500, "Internal Server Error");
        assert!(error.message().is_none());
        assert_eq!(error.to_string(), "HTTP 500: Internal Server Error");
        assert!(error.is_server_error());
    }

    #[test]
    fn test_api_error_classification() {
        assert!(ApiError::new(401, "").is_unauthorized());
        assert!(ApiError::new(403, "").is_forbidden());
        assert!(ApiError::new(404, "").is_not_found());
        assert!(ApiError::new(429, "").is_rate_limited());
        assert!(!ApiError::new(404, "").is_unauthorized());
    }
}
