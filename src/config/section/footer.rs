//! `footer` configuration.
//!
//! ```toml
//! [footer]
//! style = "dark"
//!
//! [[footer.links]]
//! title = "Docs"
//! items = [{ label = "Docs", to = "docs/introduction" }]
//! ```
//!
//! The bare list form `footer = [{ title = "Docs", items = [...] }]` is accepted too.

use macros::Config;
use serde::{Deserialize, Deserializer, Serialize};

use super::{ListOrTable, present};
use super::link::{NavLink, validate_links};
use crate::config::{ConfigDiagnostics, FieldPath};

/// Footer, in the shape it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FooterConfig {
    Sections(Vec<FooterSection>),
    Full(FooterObject),
}

impl<'de> Deserialize<'de> for FooterConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ListOrTable::new(
            "a list of footer sections or a footer table",
            FooterConfig::Sections,
            FooterConfig::Full,
        ))
    }
}

impl FooterConfig {
    pub fn sections(&self) -> &[FooterSection] {
        match self {
            Self::Sections(sections) => sections,
            Self::Full(footer) => footer.links.as_deref().unwrap_or_default(),
        }
    }

    pub fn style(&self) -> FooterStyle {
        match self {
            Self::Sections(_) => FooterStyle::default(),
            Self::Full(footer) => footer.style.unwrap_or_default(),
        }
    }

    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        let (sections, at) = match self {
            Self::Sections(sections) => (sections.as_slice(), at.clone()),
            Self::Full(footer) => (
                footer.links.as_deref().unwrap_or_default(),
                at.join(&FooterObject::FIELDS.links),
            ),
        };
        for (i, section) in sections.iter().enumerate() {
            section.validate(&at.index(i), diag);
        }
    }
}

/// Table form of the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
pub struct FooterObject {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub style: Option<FooterStyle>,

    /// Link columns.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<FooterSection>>,
}

/// Footer color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

/// One titled column of footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
pub struct FooterSection {
    pub title: String,
    pub items: Vec<NavLink>,
}

impl FooterSection {
    pub fn new(title: impl Into<String>, items: Vec<NavLink>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(at.join(&Self::FIELDS.title), "section title must not be empty");
        }
        if self.items.is_empty() {
            diag.warn(at.join(&Self::FIELDS.items), "footer section has no links");
        }
        validate_links(&self.items, &at.join(&Self::FIELDS.items), diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_table_shape() {
        let footer: FooterConfig = serde_json::from_value(json!({
            "style": "dark",
            "links": [{ "title": "Docs", "items": [{ "label": "Docs", "to": "docs/introduction" }] }]
        }))
        .unwrap();
        assert_eq!(footer.style(), FooterStyle::Dark);
        assert_eq!(footer.sections()[0].items[0].label, "Docs");
    }

    #[test]
    fn test_list_shape_defaults_light() {
        let footer: FooterConfig = serde_json::from_value(json!([
            { "title": "Community", "items": [{ "label": "GitHub", "href": "https://github.com" }] }
        ]))
        .unwrap();
        assert_eq!(footer.style(), FooterStyle::Light);
        assert_eq!(footer.sections().len(), 1);
    }

    #[test]
    fn test_unknown_style_rejected() {
        let err =
            serde_json::from_value::<FooterConfig>(json!({ "style": "blue" })).unwrap_err();
        assert!(err.to_string().contains("unknown variant"));
    }

    #[test]
    fn test_section_requires_items() {
        let err = serde_json::from_value::<FooterConfig>(json!([{ "title": "Docs" }])).unwrap_err();
        assert!(err.to_string().contains("items"));
    }

    #[test]
    fn test_validate_paths() {
        let footer = FooterConfig::Full(FooterObject {
            style: None,
            links: Some(vec![FooterSection::new(
                " ",
                vec![NavLink::internal("docs/introduction", "")],
            )]),
        });
        let mut diag = ConfigDiagnostics::new();
        footer.validate(&FieldPath::new("footer"), &mut diag);
        assert!(diag.has_error_at("footer.links[0].title"));
        assert!(diag.has_error_at("footer.links[0].items[0].label"));
    }

    #[test]
    fn test_empty_section_warns() {
        let footer = FooterConfig::Sections(vec![FooterSection::new("Docs", Vec::new())]);
        let mut diag = ConfigDiagnostics::new();
        footer.validate(&FieldPath::new("footer"), &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings()[0].field.as_str(), "footer[0].items");
    }
}
