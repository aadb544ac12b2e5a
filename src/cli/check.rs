//! `docsite check`: load, validate and summarize a config.

use anyhow::Result;
use std::path::Path;

use super::CheckArgs;
use crate::config::{LoadOptions, NavbarConfig, SiteConfig};
use crate::utils::plural_count;
use crate::{debug, log};

/// Validate the config at `path`, printing a one-line summary on success.
pub fn check_config(path: &Path, args: &CheckArgs) -> Result<()> {
    crate::logger::set_verbose(args.verbose);

    let options = LoadOptions {
        check_references: !args.no_references,
        ..LoadOptions::default()
    };
    let config = SiteConfig::from_path(path, &options)?;

    debug!("check"; "site root {}", config.root.display());
    if let Some(title) = config.navbar().and_then(NavbarConfig::title) {
        debug!("check"; "navbar title {}", title);
    }
    if let Some(sidebar) = config.sidebar_path() {
        debug!("check"; "sidebar {}", sidebar);
    }
    for css in config.custom_css() {
        debug!("check"; "stylesheet {}", css);
    }
    if args.no_references {
        debug!("check"; "file references not checked");
    }

    log!("check"; "{} is valid: {}", display_name(path), summary(&config));
    Ok(())
}

/// `3 navbar links, 2 footer sections, 1 preset`
pub fn summary(config: &SiteConfig) -> String {
    format!(
        "{}, {}, {}",
        plural_count(config.navbar_links().len(), "navbar link"),
        plural_count(config.footer_sections().len(), "footer section"),
        plural_count(config.presets().len(), "preset"),
    )
}

/// Show only the file name since the summary is about one file.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorKind;
    use serde_json::json;
    use std::fs;

    fn write(dir: &Path, raw: serde_json::Value) -> std::path::PathBuf {
        let path = dir.join("docsite.json");
        fs::write(&path, raw.to_string()).unwrap();
        path
    }

    #[test]
    fn test_summary() {
        let config = SiteConfig::starter("Docs", "https://docs.example.com");
        assert_eq!(
            summary(&config),
            "1 navbar link, 0 footer sections, 0 presets"
        );
    }

    #[test]
    fn test_check_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            json!({ "title": "Docs", "url": "https://docs.example.com", "baseUrl": "/" }),
        );
        let args = CheckArgs {
            no_references: false,
            verbose: false,
        };
        assert!(check_config(&path, &args).is_ok());
    }

    #[test]
    fn test_check_reports_missing_reference() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            json!({
                "title": "Docs",
                "url": "https://docs.example.com",
                "baseUrl": "/",
                "favicon": "img/favicon.png"
            }),
        );

        let strict = CheckArgs {
            no_references: false,
            verbose: false,
        };
        let err = check_config(&path, &strict).unwrap_err();
        let err = err.downcast_ref::<crate::config::ConfigError>().unwrap();
        assert_eq!(err.kind(), ErrorKind::Reference);

        let lenient = CheckArgs {
            no_references: true,
            verbose: false,
        };
        assert!(check_config(&path, &lenient).is_ok());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/site/docsite.toml")), "docsite.toml");
    }
}
