//! Clipboard command settings

use serde::{Deserialize, Serialize};

/// External command the widget URL is piped into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Program followed by its arguments
    #[serde(default = "default_command")]
    pub command: Vec<String>,
}

fn default_command() -> Vec<String> {
    let argv: &[&str] = if cfg!(target_os = "macos") {
        &["pbcopy"]
    } else if cfg!(target_os = "windows") {
        &["clip"]
    } else {
        &["xclip", "-selection", "clipboard"]
    };
    argv.iter().map(ToString::to_string).collect()
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
        }
    }
}
