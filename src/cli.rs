//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Static page generator for local shop listings
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to root
    #[arg(short = 'C', long, default_value = "shopsite.toml")]
    pub config: PathBuf,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Shop data file, `.csv` or `.toml` (relative to project root)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Template override directory (relative to project root)
    #[arg(short, long)]
    pub templates: Option<PathBuf>,

    /// subcommands, `build` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render every page and write the site to the output directory
    Build {
        /// Delete the output directory before writing
        #[arg(long)]
        clean: bool,
    },

    /// Load data and render all pages in memory without writing anything
    Check,

    /// Print the identifier and name of every shop
    List,

    /// Write a default config file into the root directory
    Init,
}

impl Cli {
    /// The command to run; a bare invocation builds the site.
    pub fn command_or_build(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Build { clean: false })
    }

    pub fn is_init(&self) -> bool {
        matches!(self.command, Some(Commands::Init))
    }

    /// Whether `--clean` was passed to `build`.
    pub fn clean(&self) -> bool {
        matches!(self.command, Some(Commands::Build { clean: true }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_defaults_to_build() {
        let cli = Cli::try_parse_from(["shopsite"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command_or_build(), Commands::Build { clean: false }));
        assert_eq!(cli.config, PathBuf::from("shopsite.toml"));
        assert!(!cli.clean());
    }

    #[test]
    fn test_build_clean() {
        let cli = Cli::try_parse_from(["shopsite", "build", "--clean"]).unwrap();
        assert!(cli.clean());
    }

    #[test]
    fn test_global_overrides() {
        let cli = Cli::try_parse_from([
            "shopsite", "-r", "site", "-o", "public", "-d", "shops.toml", "check",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.output, Some(PathBuf::from("public")));
        assert_eq!(cli.data, Some(PathBuf::from("shops.toml")));
        assert!(matches!(cli.command_or_build(), Commands::Check));
    }

    #[test]
    fn test_init() {
        let cli = Cli::try_parse_from(["shopsite", "init"]).unwrap();
        assert!(cli.is_init());
    }
}
