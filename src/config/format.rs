//! Raw config formats.
//!
//! The loader works on a nested `serde_json::Value`. Files are read from JSON
//! or TOML and rendered back in either format.

use serde_json::Value;
use std::path::Path;

/// Text format of a raw config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RawFormat {
    /// What the build tool consumes.
    #[default]
    Json,
    Toml,
}

impl RawFormat {
    /// `*.json` is JSON, anything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    /// Conventional file name for a new config.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Json => "docsite.json",
            Self::Toml => "docsite.toml",
        }
    }

    pub fn parse(self, content: &str) -> Result<Value, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    pub fn render(self, value: &Value) -> Result<String, String> {
        match self {
            Self::Json => serde_json::to_string_pretty(value)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .map_err(|e| e.to_string()),
            Self::Toml => toml::to_string_pretty(value).map_err(|e| e.to_string()),
        }
    }
}
