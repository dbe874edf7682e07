use thiserror::Error;

/// Errors surfaced by the recipe model and its services
#[derive(Error, Debug)]
pub enum ForkfulError {
    /// Transport-level failure (DNS, connection reset, TLS, ...)
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// No response within the configured wall-clock budget
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Non-2xx response from the recipe API
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Response body did not match the expected schema
    #[error("Malformed API response: {0}")]
    Decode(String),

    /// Invalid caller input (empty query, servings < 1, ...)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Bookmark persistence failure
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Persisted bookmarks could not be (de)serialized
    #[error("Storage serialization error: {0}")]
    StorageFormat(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ForkfulError {
    /// True for the fetch-level failures a caller may want to treat as one
    /// class: network, timeout, HTTP status and schema errors.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            ForkfulError::Network(_)
                | ForkfulError::Timeout(_)
                | ForkfulError::Http { .. }
                | ForkfulError::Decode(_)
        )
    }
}

impl From<reqwest::Error> for ForkfulError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest reports its own (connect) timeouts as errors too; fold them
        // into the same variant as the outer race so callers see one taxonomy.
        if err.is_timeout() {
            ForkfulError::Timeout(std::time::Duration::ZERO)
        } else {
            ForkfulError::Network(err)
        }
    }
}
