//! shopsite - static pages for local shop listings.
//!
//! Reads shop records, renders an index page plus one page per shop and
//! writes them under the output directory for a static host to serve.

mod build;
mod cli;
mod config;
mod data;
mod init;
mod output;
mod render;
mod utils;

use anyhow::Result;
use build::{build_site, check_site, listing, load_shops};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use init::new_config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command_or_build() {
        Commands::Init => new_config(&config),
        Commands::Build { .. } => build_site(&config).map(|_| ()),
        Commands::Check => check_site(&config).map(|_| ()),
        Commands::List => {
            print!("{}", listing(&load_shops(&config)?));
            Ok(())
        }
    }
}

/// Load config and validate it for every command except `init`
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let config = SiteConfig::load(cli)?;
    if !cli.is_init() {
        config.validate()?;
    }
    Ok(config)
}
