//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::RawFormat;

/// Load and validate documentation site configs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docsite.toml, then docsite.json)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a starter config
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config instead of writing it
        #[arg(long)]
        dry: bool,

        /// Format of the written file
        #[arg(short, long, value_enum, default_value_t = RawFormat::Toml)]
        format: RawFormat,
    },

    /// Validate the config and its file references
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Print the config in the shape the build tool consumes
    #[command(visible_alias = "d")]
    Dump {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = RawFormat::Json)]
        format: RawFormat,

        /// Skip checking that referenced files exist
        #[arg(long)]
        no_references: bool,
    },
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Skip checking that referenced files exist
    #[arg(long)]
    pub no_references: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["docsite", "-C", "site/docsite.json", "check", "--no-references"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("site/docsite.json")));
        let Commands::Check { args } = cli.command else {
            unreachable!()
        };
        assert!(args.no_references);
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_dump_format() {
        let cli = Cli::try_parse_from(["docsite", "dump", "--format", "toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Dump {
                format: RawFormat::Toml,
                no_references: false
            }
        ));

        let cli = Cli::try_parse_from(["docsite", "dump"]).unwrap();
        assert!(matches!(cli.command, Commands::Dump { format: RawFormat::Json, .. }));
    }

    #[test]
    fn test_parse_init_defaults() {
        let cli = Cli::try_parse_from(["docsite", "init", "my-docs", "--dry"]).unwrap();
        let Commands::Init { name, dry, format } = cli.command else {
            unreachable!()
        };
        assert_eq!(name, Some(PathBuf::from("my-docs")));
        assert!(dry);
        assert_eq!(format, RawFormat::Toml);
    }
}
