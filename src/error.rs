//! Error types for monitoring construction.

use thiserror::Error;

/// Result type alias for monitoring operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types raised while building monitoring units
///
/// All fallible work happens at definition time, while a unit is being
/// constructed. Rendering methods never fail once construction succeeded.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid caller-supplied configuration (missing fallback identity,
    /// malformed threshold, duplicate disambiguator)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_message() {
        let err = Error::Configuration("missing fallback name".to_string());
        assert!(err.to_string().contains("missing fallback name"));
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
