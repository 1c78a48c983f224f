//! Directory client error taxonomy.
//!
//! Three failure classes matter to callers: transport failures (backend
//! unreachable, the offline-fallback trigger), non-2xx statuses (the
//! backend answered and said no), and malformed responses (the backend
//! answered nonsense).

/// Errors from directory backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport error, including connect failures and timeouts.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The backend returned a non-2xx status.
    #[error("backend {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Response body deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The response parsed but violated the contract shape.
    #[error("malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl ClientError {
    /// Whether this error means the backend could not be reached at all.
    ///
    /// Transport failures and 5xx statuses qualify; both leave the local
    /// store as the best available data source. 4xx statuses do not: the
    /// backend is up and rejected the request.
    pub fn is_unreachable(&self) -> bool {
        match self {
            ClientError::Http { .. } => true,
            ClientError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
