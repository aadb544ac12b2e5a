//! docsite - load and validate documentation site configs.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use docsite::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Init { name, dry, format } => {
            cli::init::new_config(name.as_deref(), *format, *dry)
        }
        Commands::Check { args } => cli::check::check_config(&cli::resolve_config(&cli)?, args),
        Commands::Dump {
            format,
            no_references,
        } => cli::dump::print_config(&cli::resolve_config(&cli)?, *format, !*no_references),
    }
}
