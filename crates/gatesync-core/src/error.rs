use thiserror::Error;

/// Result type alias for gatesync operations
pub type Result<T> = std::result::Result<T, GateError>;

/// Errors that can occur while synchronizing a NextDNS profile
#[derive(Error, Debug)]
pub enum GateError {
    /// Authentication failed - invalid or missing API key
    #[error("authentication failed: invalid API key")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("rate limit exceeded, retry after {retry_after:?} seconds")]
    RateLimited {
        /// Seconds to wait before retrying, when the API says
        retry_after: Option<u64>,
    },

    /// Resource not found
    #[error("resource not found: {resource}")]
    NotFound {
        /// Description of the resource that wasn't found
        resource: String,
    },

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Source list retrieval failed
    #[error("source list error: {0}")]
    Source(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl GateError {
    /// Returns true if the error is a rate-limit rejection
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns the HTTP status code if this error maps to one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::RateLimited { .. } => Some(429),
            Self::NotFound { .. } => Some(404),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_is_classified() {
        let err = GateError::RateLimited { retry_after: None };
        assert!(err.is_rate_limited());
        assert_eq!(err.status_code(), Some(429));
    }

    #[test]
    fn other_remote_failures_are_not_rate_limited() {
        assert!(!GateError::Unauthorized.is_rate_limited());
        assert!(!GateError::Http("connection reset".into()).is_rate_limited());
        assert!(!GateError::Api {
            code: 500,
            message: "boom".into()
        }
        .is_rate_limited());
    }
}
