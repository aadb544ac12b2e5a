//! Command-line interface module.

mod args;
pub mod check;
pub mod dump;
pub mod init;

pub use args::{CheckArgs, Cli, Commands};

use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

use crate::config::{RawFormat, find_config_file};

/// Locate the config file for commands that read one.
///
/// An explicit `-C` path is searched upward like the defaults, so
/// `docsite -C docsite.json check` works from any subdirectory.
pub fn resolve_config(cli: &Cli) -> Result<PathBuf> {
    let defaults = [
        Path::new(RawFormat::Toml.file_name()),
        Path::new(RawFormat::Json.file_name()),
    ];
    let found = match &cli.config {
        Some(path) => find_config_file(&[path.as_path()]),
        None => find_config_file(&defaults),
    };

    found.ok_or_else(|| {
        let wanted = cli
            .config
            .as_deref()
            .unwrap_or(defaults[0])
            .display()
            .to_string();
        anyhow!("config file '{wanted}' not found. Run 'docsite init' to create one.")
    })
}
