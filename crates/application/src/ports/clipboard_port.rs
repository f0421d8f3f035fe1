//! Clipboard port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for writing text to the system clipboard
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    /// Replace the clipboard contents with `text`
    async fn write_text(&self, text: &str) -> Result<(), ApplicationError>;
}
