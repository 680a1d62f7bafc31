//! Frontend Errors
//!
//! Failures surfaced to the user. None of them are fatal; every one is
//! recovered by a user action (retry, adjust filter or selection).

use thiserror::Error;

/// Catalog fetch failures, shown in the status banner with a retry button
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Envelope arrived but `items` was missing or not an array
    #[error("Unexpected response format from server")]
    MalformedResponse,
    /// Server answered with a non-2xx status
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// Request never completed, or the body could not be read/parsed
    #[error("Network error: {0}")]
    Transport(String),
}

/// Comparison validation failures, shown as a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("Please select at least 2 products to compare")]
    InsufficientSelection { selected: usize },
    #[error("None of the selected products are in the current catalog")]
    NoMatchingProducts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_messages() {
        assert_eq!(
            CatalogError::MalformedResponse.to_string(),
            "Unexpected response format from server"
        );
        assert_eq!(CatalogError::Status(503).to_string(), "HTTP error! status: 503");
        assert_eq!(
            CatalogError::Transport("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_compare_error_messages() {
        let err = CompareError::InsufficientSelection { selected: 1 };
        assert_eq!(err.to_string(), "Please select at least 2 products to compare");
    }
}
