//! Tracing subscriber setup
//!
//! Console logging through `tracing-subscriber` with an `EnvFilter`.
//! Output goes to stderr so it never mixes with rendered views on stdout.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g., "info", "application=debug,integration_weather=trace")
    ///
    /// When unset the caller's fallback applies; `RUST_LOG` beats both.
    #[serde(default)]
    pub log_filter: Option<String>,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl TelemetryConfig {
    /// The filter directive that will be used when `RUST_LOG` is unset
    #[must_use]
    pub fn effective_filter<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.log_filter
            .as_deref()
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or(fallback)
    }
}

/// Telemetry initialization errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber is already installed or the filter is invalid
    #[error("Failed to initialize telemetry: {0}")]
    Init(String),
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber was already set.
pub fn init_telemetry(config: &TelemetryConfig, fallback_filter: &str) -> Result<(), TelemetryError> {
    let filter = config.effective_filter(fallback_filter);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    }

    debug!(filter, json = config.json, "Telemetry initialized");
    Ok(())
}
