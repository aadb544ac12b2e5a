//! `docsite init`: write a starter config.
//!
//! - `docsite init` writes into the current directory
//! - `docsite init <name>` writes into `<name>/`, creating it
//!
//! An existing config file is never overwritten.

use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::{RawFormat, SiteConfig};
use crate::log;

/// Placeholder origin until the site is deployed.
const STARTER_URL: &str = "https://example.com";

/// Create a starter config, or print it when `dry_run` is set.
pub fn new_config(name: Option<&Path>, format: RawFormat, dry_run: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };
    let config = SiteConfig::starter(site_title(&root), STARTER_URL);

    if dry_run {
        print!("{}", config.render(format)?);
        return Ok(());
    }

    let path = write_config(&root, &config, format)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// Write `config` as `<root>/docsite.{toml,json}`.
pub fn write_config(root: &Path, config: &SiteConfig, format: RawFormat) -> Result<PathBuf> {
    let path = root.join(format.file_name());
    validate_target(root)?;

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, config.render(format)?)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(path)
}

/// Refuse to overwrite a config of either format.
fn validate_target(root: &Path) -> Result<()> {
    for format in [RawFormat::Toml, RawFormat::Json] {
        let existing = root.join(format.file_name());
        if existing.exists() {
            bail!(
                "'{}' already exists.\n\
                 Remove it or run `docsite check` to validate it.",
                existing.display()
            );
        }
    }
    Ok(())
}

/// Title from the directory name: `graphql-ppx` -> `Graphql-ppx`.
fn site_title(root: &Path) -> String {
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "My Docs".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoadOptions;
    use tempfile::TempDir;

    #[test]
    fn test_site_title() {
        assert_eq!(site_title(Path::new("/home/me/graphql-ppx")), "Graphql-ppx");
        assert_eq!(site_title(Path::new("/")), "My Docs");
    }

    #[test]
    fn test_write_then_load() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("graphql-ppx");
        let config = SiteConfig::starter(site_title(&root), STARTER_URL);

        let path = write_config(&root, &config, RawFormat::Toml).unwrap();
        assert_eq!(path, root.join("docsite.toml"));

        let loaded = SiteConfig::from_path(&path, &LoadOptions::default()).unwrap();
        assert_eq!(loaded.title, "Graphql-ppx");
        assert_eq!(loaded.navbar_links()[0].label, "Docs");
    }

    #[test]
    fn test_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("docsite.json"), "{}").unwrap();

        let config = SiteConfig::starter("Docs", STARTER_URL);
        assert!(write_config(temp.path(), &config, RawFormat::Toml).is_err());
        assert_eq!(
            fs::read_to_string(temp.path().join("docsite.json")).unwrap(),
            "{}"
        );
    }
}
