//! `prism` syntax-highlight theme selection.
//!
//! ```toml
//! [prism]
//! theme = "github"
//! darkTheme = "oceanicNext"
//! ```
//!
//! Theme names are resolved by the build tool. Names outside the bundled
//! prism theme set are accepted with a warning.

use macros::Config;
use serde::{Deserialize, Serialize};

use super::present;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Themes bundled with `prism-react-renderer`.
pub const KNOWN_PRISM_THEMES: &[&str] = &[
    "dracula",
    "duotoneDark",
    "duotoneLight",
    "github",
    "nightOwl",
    "nightOwlLight",
    "oceanicNext",
    "okaidia",
    "palenight",
    "shadesOfPurple",
    "synthwave84",
    "ultramin",
    "vsDark",
    "vsLight",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(rename_all = "camelCase")]
pub struct PrismConfig {
    /// Light mode theme.
    pub theme: String,

    /// Dark mode theme; light theme is reused when absent.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub dark_theme: Option<String>,
}

impl PrismConfig {
    pub fn new(theme: impl Into<String>, dark_theme: Option<String>) -> Self {
        Self {
            theme: theme.into(),
            dark_theme,
        }
    }

    /// Theme used in dark mode.
    pub fn dark_theme(&self) -> &str {
        self.dark_theme.as_deref().unwrap_or(&self.theme)
    }

    /// Validate the theme pair stored under `at` (`prism` or `themeConfig.prism`).
    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        Self::validate_name(&self.theme, at.join(&Self::FIELDS.theme), diag);
        if let Some(dark) = &self.dark_theme {
            Self::validate_name(dark, at.join(&Self::FIELDS.dark_theme), diag);
        }
    }

    fn validate_name(name: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if name.trim().is_empty() {
            diag.error(field, "theme name must not be empty");
        } else if !KNOWN_PRISM_THEMES.contains(&name) {
            diag.warn(field, format!("'{name}' is not a bundled prism theme"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_fallback() {
        let prism = PrismConfig::new("github", None);
        assert_eq!(prism.dark_theme(), "github");

        let prism = PrismConfig::new("github", Some("oceanicNext".into()));
        assert_eq!(prism.dark_theme(), "oceanicNext");
    }

    #[test]
    fn test_known_themes_pass() {
        let mut diag = ConfigDiagnostics::new();
        PrismConfig::new("github", Some("oceanicNext".into()))
            .validate(&FieldPath::new("prism"), &mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_unknown_theme_warns() {
        let mut diag = ConfigDiagnostics::new();
        PrismConfig::new("github", Some("solarized".into()))
            .validate(&FieldPath::new("themeConfig.prism"), &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings()[0].field.as_str(), "themeConfig.prism.darkTheme");
    }

    #[test]
    fn test_empty_theme_rejected() {
        let mut diag = ConfigDiagnostics::new();
        PrismConfig::new("", None).validate(&FieldPath::new("prism"), &mut diag);
        assert!(diag.has_error_at("prism.theme"));
    }

    #[test]
    fn test_null_dark_theme_rejected() {
        let absent: PrismConfig =
            serde_json::from_value(serde_json::json!({ "theme": "github" })).unwrap();
        assert!(absent.dark_theme.is_none());

        let null = serde_json::json!({ "theme": "github", "darkTheme": null });
        assert!(serde_json::from_value::<PrismConfig>(null).is_err());
    }
}
