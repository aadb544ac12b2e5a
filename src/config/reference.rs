//! On-disk checks for file references in the config.
//!
//! | Reference                     | Resolved under      |
//! |-------------------------------|---------------------|
//! | `favicon`                     | `<root>/static/`    |
//! | `navbar.logo.src` / `srcDark` | `<root>/static/`    |
//! | preset `docs.sidebarPath`     | `<root>/`           |
//! | preset `theme.customCss`      | `<root>/`           |
//!
//! External URLs (`https://...`) are never checked.

use std::path::{Path, PathBuf};

use super::section::NavbarObject;
use super::{ConfigDiagnostics, FieldPath, SiteConfig};
use crate::utils::path::{is_external_link, resolve_under};

/// Default directory the build tool serves static files from.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Resolves config references against a site root.
pub struct ReferenceChecker<'a> {
    root: &'a Path,
    static_dir: PathBuf,
}

impl<'a> ReferenceChecker<'a> {
    /// `static_dir` is taken relative to `root` unless absolute.
    pub fn new(root: &'a Path, static_dir: &Path) -> Self {
        Self {
            root,
            static_dir: root.join(static_dir),
        }
    }

    /// Check every reference, collecting one error per missing file.
    pub fn check(&self, config: &SiteConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        if let Some(favicon) = &config.favicon {
            self.check_static(favicon, SiteConfig::FIELDS.favicon, &mut diag);
        }

        if let Some((navbar_at, navbar)) = config.located_navbar()
            && let Some(logo) = navbar.logo()
        {
            let at = navbar_at.join(&NavbarObject::FIELDS.logo);
            for (field, image) in logo.images(&at) {
                self.check_static(image, field, &mut diag);
            }
        }

        for (i, preset) in config.presets.iter().flatten().enumerate() {
            let at = SiteConfig::FIELDS.presets.index(i);
            for (field, reference) in preset.references(&at) {
                self.check_site(reference, field, &mut diag);
            }
        }

        diag
    }

    fn check_static(&self, reference: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
        self.check_file(reference, &self.static_dir, field, diag);
    }

    fn check_site(&self, reference: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
        self.check_file(reference, self.root, field, diag);
    }

    fn check_file(&self, reference: &str, base: &Path, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if is_external_link(reference) {
            return;
        }
        let path = resolve_under(reference, base);
        if !path.is_file() {
            diag.error_with_hint(
                field,
                format!("file '{reference}' not found"),
                format!("expected at {}", path.display()),
            );
        }
    }
}
