//! `navbar` configuration.
//!
//! Accepts a bare list of links or a table with title, logo and links:
//!
//! ```toml
//! [navbar]
//! title = "Graphql-ppx"
//! hideOnScroll = true
//! logo = { alt = "GraphQL Logo", src = "img/logo.svg", srcDark = "img/logo.svg" }
//! links = [
//!     { to = "docs/introduction", label = "Docs", position = "left" },
//! ]
//! ```

use macros::Config;
use serde::{Deserialize, Deserializer, Serialize};

use super::link::{NavLink, validate_links};
use super::{ListOrTable, present};
use crate::config::{ConfigDiagnostics, FieldPath};

/// Top navigation bar, in the shape it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavbarConfig {
    /// `navbar = [ ...links ]`
    Links(Vec<NavLink>),
    /// `[navbar]` table.
    Full(NavbarObject),
}

impl<'de> Deserialize<'de> for NavbarConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ListOrTable::new(
            "a list of links or a navbar table",
            NavbarConfig::Links,
            NavbarConfig::Full,
        ))
    }
}

impl NavbarConfig {
    pub fn links(&self) -> &[NavLink] {
        match self {
            Self::Links(links) => links,
            Self::Full(navbar) => navbar.links.as_deref().unwrap_or_default(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Links(_) => None,
            Self::Full(navbar) => navbar.title.as_deref(),
        }
    }

    pub fn logo(&self) -> Option<&LogoConfig> {
        match self {
            Self::Links(_) => None,
            Self::Full(navbar) => navbar.logo.as_ref(),
        }
    }

    /// Validate the navbar stored under `at` (the root `navbar` key).
    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        match self {
            Self::Links(links) => validate_links(links, at, diag),
            Self::Full(navbar) => navbar.validate(at, diag),
        }
    }
}

/// Table form of the navbar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(rename_all = "camelCase")]
pub struct NavbarObject {
    /// Title next to the logo.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoConfig>,

    /// Hide the bar while scrolling down.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub hide_on_scroll: Option<bool>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<NavLink>>,
}

impl NavbarObject {
    fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo {
            logo.validate(&at.join(&Self::FIELDS.logo), diag);
        }
        if let Some(links) = &self.links {
            validate_links(links, &at.join(&Self::FIELDS.links), diag);
        }
    }
}

/// Navbar logo images, served from the static directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(rename_all = "camelCase")]
pub struct LogoConfig {
    /// Alt text.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    pub src: String,

    /// Variant used by the dark color mode.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub src_dark: Option<String>,
}

impl LogoConfig {
    /// Image paths with their field paths, `src` first.
    pub fn images(&self, at: &FieldPath) -> Vec<(FieldPath, &str)> {
        let mut images = vec![(at.join(&Self::FIELDS.src), self.src.as_str())];
        if let Some(dark) = &self.src_dark {
            images.push((at.join(&Self::FIELDS.src_dark), dark.as_str()));
        }
        images
    }

    fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        for (field, image) in self.images(at) {
            if image.trim().is_empty() {
                diag.error(field, "logo image path must not be empty");
            }
        }
    }
}
