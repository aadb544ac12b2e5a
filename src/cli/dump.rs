//! `docsite dump`: print the validated config.

use anyhow::Result;
use std::path::Path;

use crate::config::{LoadOptions, RawFormat, SiteConfig};

/// Load the config at `path` and render it in `format`.
pub fn dump_config(path: &Path, format: RawFormat, check_references: bool) -> Result<String> {
    let options = LoadOptions {
        check_references,
        ..LoadOptions::default()
    };
    let config = SiteConfig::from_path(path, &options)?;
    Ok(config.render(format)?)
}

/// Print to stdout; diagnostics stay on stderr.
pub fn print_config(path: &Path, format: RawFormat, check_references: bool) -> Result<()> {
    print!("{}", dump_config(path, format, check_references)?);
    Ok(())
}
