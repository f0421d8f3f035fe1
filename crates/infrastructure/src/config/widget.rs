//! Widget and setup surface settings

use std::time::Duration;

use application::services::{DEFAULT_DEBOUNCE, SetupOptions};
use serde::{Deserialize, Serialize};

/// Settings shared by the setup surface and the widget runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetAppConfig {
    /// Widget page the generated URL points at
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Results requested per search (default: 5)
    #[serde(default = "default_search_count")]
    pub search_count: u32,

    /// Language of search results (default: zh)
    #[serde(default = "default_search_language")]
    pub search_language: String,

    /// Quiet period before a typed query is searched (default: 300ms)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

pub(super) fn default_base_url() -> String {
    SetupOptions::default().widget_base_url
}

fn default_search_count() -> u32 {
    SetupOptions::default().search_count
}

fn default_search_language() -> String {
    SetupOptions::default().search_language
}

#[allow(clippy::cast_possible_truncation)]
const fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE.as_millis() as u64
}

impl Default for WidgetAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_count: default_search_count(),
            search_language: default_search_language(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl WidgetAppConfig {
    /// Options handed to the setup controller
    #[must_use]
    pub fn setup_options(&self) -> SetupOptions {
        SetupOptions {
            widget_base_url: self.base_url.clone(),
            search_count: self.search_count,
            search_language: self.search_language.clone(),
        }
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
