//! Link entries shared by `navbar` and `footer`.
//!
//! # Example
//!
//! ```toml
//! navbar = [
//!     { to = "docs/introduction", label = "Docs", position = "left" },
//!     { href = "https://github.com/reasonml-community/graphql-ppx", label = "GitHub", position = "right" },
//! ]
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use super::present;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::is_external_link;

/// A navigation link: a site page (`to`) or an external URL (`href`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    /// Site-relative page path.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    /// Absolute external URL.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Text shown for the link.
    pub label: String,

    /// Navbar side; absent means left.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub position: Option<NavPosition>,
}

/// Where a navbar item is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

/// Resolved link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Page inside the site (`to`).
    Internal(&'a str),
    /// Anything served elsewhere (`href`).
    External(&'a str),
}

impl LinkTarget<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Internal(s) | Self::External(s) => s,
        }
    }
}

impl NavLink {
    /// Internal link (`to`).
    pub fn internal(to: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            to: Some(to.into()),
            href: None,
            label: label.into(),
            position: None,
        }
    }

    /// External link (`href`).
    pub fn external(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            to: None,
            href: Some(href.into()),
            label: label.into(),
            position: None,
        }
    }

    pub fn with_position(mut self, position: NavPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Link target, `None` only for links that failed validation.
    pub fn target(&self) -> Option<LinkTarget<'_>> {
        match (&self.to, &self.href) {
            (Some(to), None) => Some(LinkTarget::Internal(to)),
            (None, Some(href)) => Some(LinkTarget::External(href)),
            _ => None,
        }
    }

    pub fn position(&self) -> NavPosition {
        self.position.unwrap_or_default()
    }

    /// Validate one link located at `at` (e.g. `navbar[1]`).
    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.label.trim().is_empty() {
            diag.error(at.join(&Self::FIELDS.label), "label must not be empty");
        }

        match (&self.to, &self.href) {
            (Some(_), Some(_)) => diag.error_with_hint(
                at.clone(),
                format!(
                    "{} and {} are mutually exclusive",
                    Self::FIELDS.to,
                    Self::FIELDS.href
                ),
                "keep `to` for site pages or `href` for external URLs",
            ),
            (None, None) => diag.error_with_hint(
                at.clone(),
                "link has no target",
                "set `to` for site pages or `href` for external URLs",
            ),
            (Some(to), None) => Self::validate_to(to, &at.join(&Self::FIELDS.to), diag),
            (None, Some(href)) => Self::validate_href(href, &at.join(&Self::FIELDS.href), diag),
        }
    }

    fn validate_to(to: &str, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if to.trim().is_empty() {
            diag.error(field.clone(), "link target must not be empty");
        } else if is_external_link(to) {
            diag.warn(
                field.clone(),
                format!("'{to}' looks external, `href` is meant for URLs"),
            );
        }
    }

    fn validate_href(href: &str, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if href.trim().is_empty() {
            diag.error(field.clone(), "link target must not be empty");
            return;
        }
        if let Err(e) = url::Url::parse(href) {
            diag.error_with_hint(
                field.clone(),
                format!("invalid URL '{href}': {e}"),
                "use `to` for paths inside the site",
            );
        }
    }
}

/// Validate a list of links stored at `at`.
pub fn validate_links(links: &[NavLink], at: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, link) in links.iter().enumerate() {
        link.validate(&at.index(i), diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(link: &NavLink) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        link.validate(&FieldPath::new("navbar").index(0), &mut diag);
        diag
    }

    #[test]
    fn test_internal_link_ok() {
        let link = NavLink::internal("docs/introduction", "Docs");
        assert!(check(&link).is_empty());
        assert_eq!(link.target(), Some(LinkTarget::Internal("docs/introduction")));
        assert_eq!(link.position(), NavPosition::Left);
    }

    #[test]
    fn test_external_link_ok() {
        let link = NavLink::external("https://github.com/reasonml-community/graphql-ppx", "GitHub")
            .with_position(NavPosition::Right);
        assert!(check(&link).is_empty());
        assert_eq!(link.position(), NavPosition::Right);
        assert!(matches!(link.target(), Some(LinkTarget::External(_))));
    }

    #[test]
    fn test_both_targets_rejected() {
        let mut link = NavLink::internal("docs/changelog", "Changelog");
        link.href = Some("https://example.com".into());
        let diag = check(&link);
        assert!(diag.has_error_at("navbar[0]"));
        assert!(link.target().is_none());
    }

    #[test]
    fn test_missing_target_rejected() {
        let mut link = NavLink::internal("x", "Docs");
        link.to = None;
        assert!(check(&link).has_error_at("navbar[0]"));
    }

    #[test]
    fn test_empty_values_rejected() {
        let diag = check(&NavLink::internal("  ", ""));
        assert!(diag.has_error_at("navbar[0].label"));
        assert!(diag.has_error_at("navbar[0].to"));
    }

    #[test]
    fn test_relative_href_rejected() {
        let diag = check(&NavLink::external("docs/intro", "Docs"));
        assert!(diag.has_error_at("navbar[0].href"));
    }

    #[test]
    fn test_external_to_warns() {
        let diag = check(&NavLink::internal("https://example.com", "Out"));
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_field_paths() {
        assert_eq!(NavLink::FIELDS.label.as_str(), "label");
        assert_eq!(NavLink::KEYS, &["to", "href", "label", "position"]);
    }

    #[test]
    fn test_validate_links_indexes() {
        let links = vec![
            NavLink::internal("docs/introduction", "Docs"),
            NavLink::internal("docs/changelog", ""),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_links(&links, &FieldPath::new("footer[0].items"), &mut diag);
        assert!(diag.has_error_at("footer[0].items[1].label"));
        assert_eq!(diag.len(), 1);
    }
}
