//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Geocoding search failed
    #[error("Search failed: {0}")]
    Search(String),

    /// Forecast request failed
    #[error("Forecast failed: {0}")]
    Forecast(String),

    /// One fetch of a batch failed; the whole batch is discarded
    #[error("Weather fetch failed for {location}: {source}")]
    BatchFetch {
        /// Name of the location whose fetch failed
        location: String,
        /// The failure itself
        #[source]
        source: Box<ApplicationError>,
    },

    /// Widget URL parameters could not be decoded
    #[error("Config decode error: {0}")]
    ConfigDecode(String),

    /// Key-value store error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Clipboard write failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the error came from the weather API
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Search(_) | Self::Forecast(_) | Self::BatchFetch { .. }
        )
    }
}
