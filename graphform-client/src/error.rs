//! Error types for the DESCRIBE client

/// Error type for DESCRIBE fetch operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connection, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status after the POST fallback
    #[error("SPARQL endpoint returned status {code}")]
    Status {
        /// The HTTP status code of the final (fallback) response
        code: u16,
    },
}

/// Result type for DESCRIBE client operations
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Create a status error from a status code
    pub fn status(code: u16) -> Self {
        Self::Status { code }
    }

    /// The HTTP status code, when this is a status error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code } => Some(*code),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
