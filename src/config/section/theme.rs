//! `themeConfig` wrapper.
//!
//! The build tool's own layout keeps the theme keys in one table:
//!
//! ```toml
//! [themeConfig]
//! hideOnScroll = true
//! prism = { theme = "github", darkTheme = "oceanicNext" }
//!
//! [themeConfig.navbar]
//! title = "Graphql-ppx"
//! ```
//!
//! The same keys are also accepted at the top level. Whichever layout was
//! read is the one written back.

use macros::Config;
use serde::{Deserialize, Serialize};

use super::footer::FooterConfig;
use super::navbar::NavbarConfig;
use super::present;
use super::prism::PrismConfig;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Hide the navbar while scrolling down.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub hide_on_scroll: Option<bool>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub prism: Option<PrismConfig>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub navbar: Option<NavbarConfig>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,
}

impl ThemeConfig {
    /// Validate the nested sections stored under `at` (`themeConfig`).
    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        if let Some(prism) = &self.prism {
            prism.validate(&at.join(&Self::FIELDS.prism), diag);
        }
        if let Some(navbar) = &self.navbar {
            navbar.validate(&at.join(&Self::FIELDS.navbar), diag);
        }
        if let Some(footer) = &self.footer {
            footer.validate(&at.join(&Self::FIELDS.footer), diag);
        }
    }
}
