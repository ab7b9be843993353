//! Application Configuration
//!
//! Read from an optional `<script type="application/json" id="app-config">`
//! element on the page. Every field has a default.

use rolling_logger::LoggerConfig;
use serde::{Deserialize, Serialize};
use todo_core::ModelConfig;

/// Id of the element holding the JSON configuration
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid app config: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub log: LoggerConfig,
}

impl AppConfig {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from the page; no config element means defaults
    pub fn from_document() -> Result<Self, ConfigError> {
        let raw = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) => Self::parse(&raw),
            None => Ok(Self::default()),
        }
    }
}
