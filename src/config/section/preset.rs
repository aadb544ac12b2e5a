//! `presets` configuration.
//!
//! Each entry is a preset name or a `[name, options]` pair. Options are an
//! opaque table handed to the preset verbatim; only the file references the
//! loader can check are looked at:
//!
//! ```toml
//! presets = [
//!     ["@docusaurus/preset-classic", { docs = { sidebarPath = "./sidebars.js" }, theme = { customCss = "./src/css/custom.css" } }],
//! ]
//! ```

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::{expect_str, kind_of};
use crate::config::{ConfigDiagnostics, FieldPath};

const DOCS: &str = "docs";
const SIDEBAR_PATH: &str = "sidebarPath";
const THEME: &str = "theme";
const CUSTOM_CSS: &str = "customCss";

/// One preset reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PresetEntry {
    /// `"@docusaurus/preset-classic"`
    Name(String),
    /// `["@docusaurus/preset-classic", { ... }]`
    WithOptions(String, Map<String, Value>),
}

impl<'de> Deserialize<'de> for PresetEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PresetVisitor;

        impl<'de> Visitor<'de> for PresetVisitor {
            type Value = PresetEntry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a preset name or a [name, options] pair")
            }

            fn visit_str<E: de::Error>(self, name: &str) -> Result<PresetEntry, E> {
                Ok(PresetEntry::Name(name.to_string()))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<PresetEntry, A::Error> {
                let name: String = seq
                    .next_element()?
                    .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;
                let options: Map<String, Value> = seq
                    .next_element()?
                    .ok_or_else(|| <A::Error as de::Error>::invalid_length(1, &self))?;
                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(3, &self));
                }
                Ok(PresetEntry::WithOptions(name, options))
            }
        }

        deserializer.deserialize_any(PresetVisitor)
    }
}

impl PresetEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::WithOptions(name, _) => name,
        }
    }

    pub fn options(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Name(_) => None,
            Self::WithOptions(_, options) => Some(options),
        }
    }

    /// Look up a nested option, e.g. `["docs", "sidebarPath"]`.
    pub fn option(&self, keys: &[&str]) -> Option<&Value> {
        let (first, rest) = keys.split_first()?;
        let mut value = self.options()?.get(*first)?;
        for key in rest {
            value = value.get(*key)?;
        }
        Some(value)
    }

    /// Sidebar definition file (`docs.sidebarPath`).
    pub fn sidebar_path(&self) -> Option<&str> {
        self.option(&[DOCS, SIDEBAR_PATH]).and_then(Value::as_str)
    }

    /// Stylesheets (`theme.customCss`), a single path or a list.
    pub fn custom_css(&self) -> Vec<&str> {
        match self.option(&[THEME, CUSTOM_CSS]) {
            Some(Value::String(path)) => vec![path.as_str()],
            Some(Value::Array(paths)) => paths.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// File references with their field paths, for on-disk checks.
    ///
    /// Paths match [`PresetEntry::validate`]: `presets[0][1].docs.sidebarPath`.
    pub fn references(&self, at: &FieldPath) -> Vec<(FieldPath, &str)> {
        let options_at = at.index(1);
        let mut refs = Vec::new();

        if let Some(sidebar) = self.sidebar_path() {
            let field = options_at
                .join(&FieldPath::new(DOCS))
                .join(&FieldPath::new(SIDEBAR_PATH));
            refs.push((field, sidebar));
        }

        let css_at = options_at
            .join(&FieldPath::new(THEME))
            .join(&FieldPath::new(CUSTOM_CSS));
        match self.option(&[THEME, CUSTOM_CSS]) {
            Some(Value::String(path)) => refs.push((css_at, path.as_str())),
            Some(Value::Array(paths)) => {
                for (i, path) in paths.iter().enumerate() {
                    if let Some(path) = path.as_str() {
                        refs.push((css_at.index(i), path));
                    }
                }
            }
            _ => {}
        }
        refs
    }

    /// Shape checks for the references inside the opaque options.
    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.name().trim().is_empty() {
            diag.error(at.clone(), "preset name must not be empty");
        }
        let Some(options) = self.options() else {
            return;
        };
        // Options sit at index 1 of the pair
        let options_at = at.index(1);

        if let Some(docs) = options.get(DOCS) {
            let docs_at = options_at.join(&FieldPath::new(DOCS));
            match docs {
                Value::Object(docs) => {
                    if let Some(sidebar) = docs.get(SIDEBAR_PATH) {
                        expect_str(sidebar, &docs_at.join(&FieldPath::new(SIDEBAR_PATH)), diag);
                    }
                }
                Value::Bool(false) => {}
                other => diag.error(
                    docs_at,
                    format!("expected a table or `false`, found {}", kind_of(other)),
                ),
            }
        }

        if let Some(theme) = options.get(THEME) {
            let theme_at = options_at.join(&FieldPath::new(THEME));
            match theme {
                Value::Object(theme) => {
                    if let Some(css) = theme.get(CUSTOM_CSS) {
                        Self::validate_custom_css(
                            css,
                            &theme_at.join(&FieldPath::new(CUSTOM_CSS)),
                            diag,
                        );
                    }
                }
                other => diag.error(
                    theme_at,
                    format!("expected a table, found {}", kind_of(other)),
                ),
            }
        }
    }

    fn validate_custom_css(css: &Value, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        match css {
            Value::Array(paths) => {
                for (i, path) in paths.iter().enumerate() {
                    expect_str(path, &at.index(i), diag);
                }
            }
            other => {
                expect_str(other, at, diag);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classic() -> PresetEntry {
        serde_json::from_value(json!([
            "@docusaurus/preset-classic",
            {
                "docs": { "sidebarPath": "./sidebars.js", "admonitions": {} },
                "theme": { "customCss": "./src/css/custom.css" }
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_pair_form() {
        let preset = classic();
        assert_eq!(preset.name(), "@docusaurus/preset-classic");
        assert_eq!(preset.sidebar_path(), Some("./sidebars.js"));
        assert_eq!(preset.custom_css(), vec!["./src/css/custom.css"]);
        assert!(preset.option(&["docs", "admonitions"]).is_some());
    }

    #[test]
    fn test_name_form() {
        let preset: PresetEntry = serde_json::from_value(json!("classic")).unwrap();
        assert_eq!(preset, PresetEntry::Name("classic".into()));
        assert!(preset.sidebar_path().is_none());
        assert!(preset.custom_css().is_empty());
        assert_eq!(serde_json::to_value(&preset).unwrap(), json!("classic"));
    }

    #[test]
    fn test_options_pass_through() {
        let raw = json!(["classic", { "blog": { "showReadingTime": true }, "docs": false }]);
        let preset: PresetEntry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&preset).unwrap(), raw);
    }

    #[test]
    fn test_bad_lengths_rejected() {
        assert!(serde_json::from_value::<PresetEntry>(json!(["classic"])).is_err());
        assert!(serde_json::from_value::<PresetEntry>(json!(["classic", {}, {}])).is_err());
        assert!(serde_json::from_value::<PresetEntry>(json!(42)).is_err());
    }

    #[test]
    fn test_custom_css_list() {
        let preset: PresetEntry = serde_json::from_value(json!([
            "classic",
            { "theme": { "customCss": ["./a.css", "./b.css"] } }
        ]))
        .unwrap();
        assert_eq!(preset.custom_css(), vec!["./a.css", "./b.css"]);
    }

    #[test]
    fn test_references() {
        let at = FieldPath::new("presets").index(0);
        let preset = classic();
        let refs = preset.references(&at);
        let fields: Vec<_> = refs.iter().map(|(f, p)| (f.as_str(), *p)).collect();
        assert_eq!(
            fields,
            vec![
                ("presets[0][1].docs.sidebarPath", "./sidebars.js"),
                ("presets[0][1].theme.customCss", "./src/css/custom.css"),
            ]
        );

        let preset: PresetEntry = serde_json::from_value(json!([
            "classic",
            { "theme": { "customCss": ["./a.css", "./b.css"] } }
        ]))
        .unwrap();
        let refs = preset.references(&at);
        assert_eq!(refs[1].0.as_str(), "presets[0][1].theme.customCss[1]");

        assert!(PresetEntry::Name("classic".into()).references(&at).is_empty());
    }

    #[test]
    fn test_validate_reference_shapes() {
        let preset: PresetEntry = serde_json::from_value(json!([
            "classic",
            { "docs": { "sidebarPath": 3 }, "theme": { "customCss": ["./a.css", ""] } }
        ]))
        .unwrap();
        let mut diag = ConfigDiagnostics::new();
        preset.validate(&FieldPath::new("presets").index(0), &mut diag);
        assert!(diag.has_error_at("presets[0][1].docs.sidebarPath"));
        assert!(diag.has_error_at("presets[0][1].theme.customCss[1]"));
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_validate_ok() {
        let mut diag = ConfigDiagnostics::new();
        classic().validate(&FieldPath::new("presets").index(0), &mut diag);
        assert!(diag.is_empty());
    }
}
