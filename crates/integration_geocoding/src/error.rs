//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding operations
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Invalid configuration or HTTP client construction failure
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The request could not be sent to the geocoding service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The response body could not be read
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response from the geocoding service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Forward geocode matched nothing. Deliberately a bare sentinel so
    /// callers can detect it by variant alone.
    #[error("ZERO_RESULTS")]
    ZeroResults,

    /// Reverse geocode matched nothing. Carries the provider's reported
    /// status and error message verbatim.
    #[error("Failed: ({status}) {message}")]
    NoResults {
        /// Provider status code, e.g. `OVER_QUERY_LIMIT`
        status: String,
        /// Provider error message, may be empty
        message: String,
    },

    /// A required input was missing or empty
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The premier secret key is not valid base64
    #[error("Invalid signing key: {0}")]
    InvalidKey(String),
}

impl GeocodingError {
    /// Returns true if this error is retryable
    ///
    /// The client itself never retries; this classifies errors for callers
    /// that own retry policy.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::RequestFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_errors() {
        assert!(GeocodingError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(GeocodingError::RequestFailed("test".to_string()).is_retryable());
    }

    #[test]
    fn non_retryable_errors() {
        assert!(!GeocodingError::ParseError("test".to_string()).is_retryable());
        assert!(!GeocodingError::ZeroResults.is_retryable());
        assert!(
            !GeocodingError::NoResults {
                status: "ZERO_RESULTS".to_string(),
                message: String::new(),
            }
            .is_retryable()
        );
        assert!(!GeocodingError::InvalidInput("address".to_string()).is_retryable());
        assert!(!GeocodingError::InvalidKey("bad padding".to_string()).is_retryable());
    }

    #[test]
    fn zero_results_display_matches_provider_sentinel() {
        assert_eq!(GeocodingError::ZeroResults.to_string(), "ZERO_RESULTS");
    }

    #[test]
    fn no_results_display_carries_diagnostics() {
        let err = GeocodingError::NoResults {
            status: "REQUEST_DENIED".to_string(),
            message: "The provided API key is invalid.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed: (REQUEST_DENIED) The provided API key is invalid."
        );
    }

    #[test]
    fn zero_results_distinguishable_from_no_results() {
        let zero = GeocodingError::ZeroResults;
        let none = GeocodingError::NoResults {
            status: "ZERO_RESULTS".to_string(),
            message: String::new(),
        };
        assert!(matches!(zero, GeocodingError::ZeroResults));
        assert!(!matches!(none, GeocodingError::ZeroResults));
    }
}
