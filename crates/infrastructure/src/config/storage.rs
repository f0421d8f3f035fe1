//! Persistence settings for the setup state

use std::path::PathBuf;

use application::error::ApplicationError;
use application::services::STORAGE_KEY;
use serde::{Deserialize, Serialize};

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "overlay-weather";

/// Where the setup surface keeps its state between sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory; the platform config dir when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Key the setup state is stored under
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_key() -> String {
    STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            key: default_key(),
        }
    }
}

impl StorageConfig {
    /// Configured directory, or `<config dir>/overlay-weather`
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no directory is configured and the
    /// platform has no config dir.
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ApplicationError> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| {
                ApplicationError::Configuration("Could not determine config directory".into())
            })
    }
}
