//! Site configuration for the documentation build tool.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Nested records (navbar, footer, prism, presets)
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── format         # JSON / TOML raw formats
//! ├── reference      # On-disk reference checks
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Keys
//!
//! | Key                              | Purpose                                   |
//! |----------------------------------|-------------------------------------------|
//! | `title`, `tagline`               | Site metadata                             |
//! | `url`, `baseUrl`                 | Deployment origin and path prefix         |
//! | `favicon`                        | Icon under the static directory           |
//! | `organizationName`, `projectName`| Repository owner and name                 |
//! | `navbar`                         | Top navigation links                      |
//! | `footer`                         | Footer link columns                       |
//! | `prism`                          | Syntax-highlight themes                   |
//! | `themeConfig`                    | Wrapper for `navbar`, `footer`, `prism`   |
//! | `presets`                        | Preset names and pass-through options     |
//!
//! Loading is strict: unknown keys, missing required keys and invariant
//! violations are collected into one [`ConfigError::Schema`]. Optional keys
//! that were omitted stay omitted in [`SiteConfig::to_value`]; `null` is not
//! accepted for them.
//!
//! `navbar`, `footer` and `prism` may sit at the top level or inside
//! `themeConfig`, but not both.

pub mod section;
pub mod types;
mod format;
mod reference;
mod util;

pub use format::RawFormat;
pub use reference::{DEFAULT_STATIC_DIR, ReferenceChecker};
pub use util::find_config_file;

// Re-export from section/
pub use section::{
    FooterConfig, FooterObject, FooterSection, FooterStyle, KNOWN_PRISM_THEMES, LinkTarget,
    LogoConfig, NavLink, NavPosition, NavbarConfig, NavbarObject, PresetEntry, PrismConfig,
    ThemeConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ErrorKind, FieldPath};

use crate::{debug, utils::path::normalize_path};
use macros::Config;
use section::present;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::{error_path, extract_url_path, ignored_path, missing_field, suggest_key};

// ============================================================================
// load options
// ============================================================================

/// Options for [`SiteConfig::from_path`].
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Check that referenced files exist.
    pub check_references: bool,
    /// Static directory, relative to the site root.
    pub static_dir: PathBuf,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            check_references: true,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration consumed by the documentation build tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site root, the config file's directory (internal use only)
    #[serde(skip)]
    #[config(skip)]
    pub root: PathBuf,

    /// Site title, shown in the navbar and page titles.
    pub title: String,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    /// Deployment origin, e.g. `https://graphql-ppx.com`.
    pub url: String,

    /// Path the site is served under, e.g. `/` or `/graphql-ppx/`.
    pub base_url: String,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,

    /// GitHub organization or user.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,

    /// GitHub repository name.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub navbar: Option<NavbarConfig>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub prism: Option<PrismConfig>,

    /// Theme sections in the build tool's nested layout.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub theme_config: Option<ThemeConfig>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub presets: Option<Vec<PresetEntry>>,
}

impl SiteConfig {
    /// Minimal config written by `docsite init`.
    pub fn starter(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            root: PathBuf::new(),
            title: title.into(),
            tagline: None,
            url: url.into(),
            base_url: "/".into(),
            favicon: None,
            organization_name: None,
            project_name: None,
            navbar: Some(NavbarConfig::Links(vec![NavLink::internal(
                "docs/introduction",
                "Docs",
            )])),
            footer: None,
            prism: Some(PrismConfig::new("github", Some("dracula".into()))),
            theme_config: None,
            presets: None,
        }
    }

    // ========================================================================
    // loading
    // ========================================================================

    /// Load and validate a raw config.
    ///
    /// Warnings are printed; use [`SiteConfig::load_with_diagnostics`] to
    /// handle them yourself.
    pub fn load(raw: &Value) -> Result<Self, ConfigError> {
        let (config, diag) = Self::load_with_diagnostics(raw)?;
        diag.print_warnings();
        Ok(config)
    }

    /// Load and validate a raw config, returning the collected warnings.
    pub fn load_with_diagnostics(raw: &Value) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        let (parsed, ignored) = Self::parse_with_ignored(raw);
        for (field, key) in ignored {
            Self::report_unknown(field, &key, &mut diag);
        }

        let config = match parsed {
            Ok(config) => config,
            Err(err) => {
                let mut field = error_path(err.path());
                let message = err.inner().to_string();
                if let Some(name) = missing_field(&message) {
                    field = field.join(&FieldPath::owned(name));
                }
                diag.error(field, message);
                return Err(ConfigError::Schema(diag));
            }
        };

        config.validate(&mut diag);
        let diag = diag.into_result().map_err(ConfigError::Schema)?;
        Ok((config, diag))
    }

    /// Deserialize, collecting unknown keys instead of dropping them.
    #[allow(clippy::type_complexity)]
    fn parse_with_ignored(
        raw: &Value,
    ) -> (
        Result<Self, serde_path_to_error::Error<serde_json::Error>>,
        Vec<(FieldPath, String)>,
    ) {
        let mut ignored = Vec::new();
        let mut record = |path: serde_ignored::Path| ignored.push(ignored_path(&path));
        let deserializer = serde_ignored::Deserializer::new(raw, &mut record);
        let parsed = serde_path_to_error::deserialize(deserializer);
        (parsed, ignored)
    }

    fn report_unknown(field: FieldPath, key: &str, diag: &mut ConfigDiagnostics) {
        let message = format!("unknown field `{key}`");
        if let Some(known) = suggest_key(key, Self::known_keys()) {
            diag.error_with_hint(field, message, format!("did you mean `{known}`?"));
        } else {
            diag.error(field, message);
        }
    }

    /// Every key of every typed record, for typo suggestions.
    fn known_keys() -> impl Iterator<Item = &'static str> {
        [
            Self::KEYS,
            NavLink::KEYS,
            NavbarObject::KEYS,
            LogoConfig::KEYS,
            FooterObject::KEYS,
            FooterSection::KEYS,
            PrismConfig::KEYS,
            ThemeConfig::KEYS,
        ]
        .into_iter()
        .flatten()
        .copied()
    }

    /// Parse config text in the given format.
    pub fn from_str(content: &str, format: RawFormat) -> Result<Self, ConfigError> {
        let raw = format
            .parse(content)
            .map_err(|e| ConfigError::Parse(PathBuf::from("<string>"), e))?;
        Self::load(&raw)
    }

    /// Load a config file; the format follows the extension.
    ///
    /// The file's directory becomes [`SiteConfig::root`], against which
    /// references are checked when `options.check_references` is set.
    pub fn from_path(path: &Path, options: &LoadOptions) -> Result<Self, ConfigError> {
        debug!("config"; "reading {}", path.display());
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let raw = RawFormat::from_path(path)
            .parse(&content)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;

        let mut config = Self::load(&raw)?;
        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        config.root = normalize_path(dir);

        if options.check_references {
            config.check_references_with(&config.root, &options.static_dir)?;
        }
        Ok(config)
    }

    // ========================================================================
    // output
    // ========================================================================

    /// Raw form of the config, equal to what was loaded.
    pub fn to_value(&self) -> Value {
        // Only string keys and plain values, so conversion cannot fail
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Render as pretty JSON or TOML.
    pub fn render(&self, format: RawFormat) -> Result<String, ConfigError> {
        format.render(&self.to_value()).map_err(ConfigError::Render)
    }

    // ========================================================================
    // references
    // ========================================================================

    /// Check file references against `root` with the default static directory.
    pub fn check_references(&self, root: &Path) -> Result<(), ConfigError> {
        self.check_references_with(root, Path::new(DEFAULT_STATIC_DIR))
    }

    pub fn check_references_with(&self, root: &Path, static_dir: &Path) -> Result<(), ConfigError> {
        ReferenceChecker::new(root, static_dir)
            .check(self)
            .into_result()
            .map(|_| ())
            .map_err(ConfigError::Reference)
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Navbar from the top level or `themeConfig`, with its field path.
    pub(crate) fn located_navbar(&self) -> Option<(FieldPath, &NavbarConfig)> {
        if let Some(navbar) = &self.navbar {
            return Some((Self::FIELDS.navbar, navbar));
        }
        let navbar = self.theme_config.as_ref()?.navbar.as_ref()?;
        Some((Self::FIELDS.theme_config.join(&ThemeConfig::FIELDS.navbar), navbar))
    }

    pub fn navbar(&self) -> Option<&NavbarConfig> {
        self.located_navbar().map(|(_, navbar)| navbar)
    }

    pub fn footer(&self) -> Option<&FooterConfig> {
        self.footer
            .as_ref()
            .or_else(|| self.theme_config.as_ref()?.footer.as_ref())
    }

    pub fn prism(&self) -> Option<&PrismConfig> {
        self.prism
            .as_ref()
            .or_else(|| self.theme_config.as_ref()?.prism.as_ref())
    }

    /// Navbar links, whichever shape and layout the navbar was written in.
    pub fn navbar_links(&self) -> &[NavLink] {
        self.navbar()
            .map(NavbarConfig::links)
            .unwrap_or_default()
    }

    pub fn footer_sections(&self) -> &[FooterSection] {
        self.footer()
            .map(FooterConfig::sections)
            .unwrap_or_default()
    }

    /// First sidebar definition declared by a preset.
    pub fn sidebar_path(&self) -> Option<&str> {
        self.presets().iter().find_map(PresetEntry::sidebar_path)
    }

    /// Custom stylesheets declared by all presets.
    pub fn custom_css(&self) -> Vec<&str> {
        self.presets()
            .iter()
            .flat_map(PresetEntry::custom_css)
            .collect()
    }

    pub fn presets(&self) -> &[PresetEntry] {
        self.presets.as_deref().unwrap_or_default()
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect every invariant violation into `diag`.
    fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.validate_metadata(diag);

        if let Some(navbar) = &self.navbar {
            navbar.validate(&Self::FIELDS.navbar, diag);
        }
        if let Some(footer) = &self.footer {
            footer.validate(&Self::FIELDS.footer, diag);
        }
        if let Some(prism) = &self.prism {
            prism.validate(&Self::FIELDS.prism, diag);
        }
        if let Some(theme) = &self.theme_config {
            let at = Self::FIELDS.theme_config;
            theme.validate(&at, diag);
            self.validate_single_layout(theme, &at, diag);
        }
        for (i, preset) in self.presets().iter().enumerate() {
            preset.validate(&Self::FIELDS.presets.index(i), diag);
        }
    }

    /// A theme section may be written in one place only.
    fn validate_single_layout(
        &self,
        theme: &ThemeConfig,
        at: &FieldPath,
        diag: &mut ConfigDiagnostics,
    ) {
        let twice = [
            (self.navbar.is_some() && theme.navbar.is_some(), ThemeConfig::FIELDS.navbar),
            (self.footer.is_some() && theme.footer.is_some(), ThemeConfig::FIELDS.footer),
            (self.prism.is_some() && theme.prism.is_some(), ThemeConfig::FIELDS.prism),
        ];
        for (duplicated, key) in twice {
            if duplicated {
                diag.error_with_hint(
                    at.join(&key),
                    format!("{key} is also set at the top level"),
                    "keep one of the two",
                );
            }
        }
    }

    fn validate_metadata(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "title must not be empty");
        }

        // URL format check using url crate for strict validation
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                // Must be http or https
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://graphql-ppx.com",
                    );
                }
                // Must have a valid host
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://graphql-ppx.com",
                    );
                }
                if let Some(path) = extract_url_path(&self.url)
                    && !path.is_empty()
                {
                    diag.warn(
                        Self::FIELDS.url,
                        format!("path '/{path}' belongs in {}", Self::FIELDS.base_url),
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {e}"),
                    "use format like https://graphql-ppx.com",
                );
            }
        }

        if self.base_url.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                "base URL must not be empty",
                "use \"/\" for a site served at the domain root",
            );
        } else if !self.base_url.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                format!("'{}' must start with '/'", self.base_url),
                format!("use \"/{}\"", self.base_url),
            );
        } else if !self.base_url.ends_with('/') {
            diag.warn(Self::FIELDS.base_url, "base URL should end with '/'");
        }

        if let Some(favicon) = &self.favicon
            && favicon.trim().is_empty()
        {
            diag.error(Self::FIELDS.favicon, "favicon path must not be empty");
        }
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Raw config with the required keys plus `extra`.
/// Panics if `extra` is not an object.
#[cfg(test)]
pub fn test_raw_config(extra: Value) -> Value {
    let mut raw = serde_json::json!({
        "title": "Graphql-ppx",
        "url": "https://graphql-ppx.com",
        "baseUrl": "/",
    });
    if let (Value::Object(map), Value::Object(extra)) = (&mut raw, extra) {
        map.extend(extra);
    } else {
        panic!("test_raw_config expects an object");
    }
    raw
}

// ============================================================================
// tests
// ============================================================================
