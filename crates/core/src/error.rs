use thiserror::Error;

/// Result type alias for askara-core
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the askara study client
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error for file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Remote study service errors (transport failures and non-2xx responses)
    #[error("service error: {0}")]
    Service(String),

    /// Parse/serialization errors
    #[error("parse error: {0}")]
    Parse(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build a service error from an HTTP status and a body excerpt.
    ///
    /// The body is truncated so a misbehaving server cannot flood the log.
    pub fn service_status(status: u16, body: &str) -> Self {
        const BODY_EXCERPT: usize = 200;
        let excerpt: String = body.chars().take(BODY_EXCERPT).collect();
        Error::Service(format!("HTTP {}: {}", status, excerpt))
    }
}
