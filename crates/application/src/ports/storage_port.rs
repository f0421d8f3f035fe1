//! Key-value storage port
//!
//! String blobs under string keys. The setup surface keeps its whole
//! configuration under one key.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for a local key-value store
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// `Ok(None)` when the key has never been written
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError>;
}
