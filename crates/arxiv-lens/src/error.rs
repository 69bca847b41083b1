//! Error types for arXiv Lens.
//!
//! Each layer has its own `thiserror` enum. Mapping to HTTP status codes happens
//! exactly once, in [`ApiError`].

use std::time::Duration;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors from the arXiv HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited by the arXiv API (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// The Atom feed could not be understood
    #[error("Failed to parse feed: {message}")]
    Parse {
        /// What was wrong with the feed
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Create a feed parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse { message: message.into() }
    }
}

/// Errors from a translation engine invocation.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// HTTP transport error talking to the inference endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Inference endpoint answered with a non-success status
    #[error("Inference endpoint returned {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body was not the expected JSON
    #[error("Failed to parse engine output: {0}")]
    Parse(#[from] serde_json::Error),

    /// Engine answered without any generated text
    #[error("Engine returned no translation")]
    EmptyOutput,
}

/// Errors from the search pipeline.
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Error from the search provider
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl SearchError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }
}

/// Errors from the translation pipeline.
#[derive(thiserror::Error, Debug)]
pub enum TranslationError {
    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Error from the translation engine
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl TranslationError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }
}

/// Error surfaced to HTTP clients.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Missing or malformed input (HTTP 400)
    #[error("{0}")]
    Validation(String),

    /// Failure anywhere downstream of validation (HTTP 500)
    #[error("{0}")]
    Processing(String),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Validation { message, .. } => Self::Validation(message),
            SearchError::Client(e) => Self::Processing(e.to_string()),
        }
    }
}

impl From<TranslationError> for ApiError {
    fn from(err: TranslationError) -> Self {
        match err {
            TranslationError::Validation { message, .. } => Self::Validation(message),
            TranslationError::Engine(e) => Self::Processing(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Validation(message) => tracing::debug!(%message, "Rejected request"),
            Self::Processing(message) => tracing::error!(%message, "Request failed"),
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_message() {
        let err = ClientError::rate_limited(60);
        assert!(matches!(err, ClientError::RateLimited { retry_after } if retry_after == Duration::from_secs(60)));
        assert_eq!(err.to_string(), "Rate limited, retry after 60s");
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: ApiError = SearchError::validation("query", "Query parameter is required").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Query parameter is required");
    }

    #[test]
    fn test_provider_failure_maps_to_internal_error() {
        let err: ApiError = SearchError::from(ClientError::server(503, "unavailable")).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("unavailable"));
    }

    #[test]
    fn test_engine_failure_keeps_underlying_message() {
        let err: ApiError = TranslationError::from(EngineError::EmptyOutput).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Engine returned no translation");
    }
}
