//! File-backed key-value store
//!
//! Each key is a `<key>.json` file in one directory. Values are written to a
//! sibling temp file first and renamed into place.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::KeyValueStorePort;
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Key-value store keeping one file per key
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Store rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding `key`
    ///
    /// Characters outside `[A-Za-z0-9_-]` become `_` so a key never
    /// escapes the directory.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file_stem}.json"))
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => {
                debug!(path = %path.display(), "Read stored value");
                Ok(Some(value))
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ApplicationError::Storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    #[instrument(skip(self, value), fields(len = value.len()))]
    async fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            ApplicationError::Storage(format!(
                "Failed to create {}: {e}",
                self.dir.display()
            ))
        })?;

        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");

        tokio::fs::write(&tmp_path, value).await.map_err(|e| {
            ApplicationError::Storage(format!("Failed to write {}: {e}", tmp_path.display()))
        })?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp_path).await {
                warn!(path = %tmp_path.display(), error = %cleanup, "Failed to remove temp file");
            }
            return Err(ApplicationError::Storage(format!(
                "Failed to replace {}: {e}",
                path.display()
            )));
        }

        info!(path = %path.display(), "Stored value");
        Ok(())
    }
}
