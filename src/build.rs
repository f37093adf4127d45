//! Site generation.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── load_shops()    ──► Vec<Shop> (ids checked for uniqueness)
//!     ├── Templates::load ──► built-ins + overrides
//!     ├── render_site()   ──► Vec<Page> (nothing written yet)
//!     │
//!     ├── clean()         ──► only with `[build.clean]` / `--clean`
//!     ├── write()         ──► one file per page
//!     └── prune_stale()   ──► drop shops/<id>/ of removed shops
//! ```
//!
//! Every page is rendered before the first write, so a data or template
//! error leaves the previous output untouched.

use crate::{
    config::SiteConfig,
    data::{self, Shop},
    log,
    output::OutputDir,
    render::{self, Page, Templates},
};
use anyhow::{Context, Result};

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub shops: usize,
    pub written: usize,
    pub pruned: Vec<String>,
}

/// Load shops from the configured data file.
pub fn load_shops(config: &SiteConfig) -> Result<Vec<Shop>> {
    let path = &config.build.data;
    data::load_shops(path)
        .with_context(|| format!("Failed to load shops from {}", path.display()))
}

/// Load data and templates and render every page in memory.
pub fn render_all(config: &SiteConfig) -> Result<(Vec<Shop>, Vec<Page>)> {
    let shops = load_shops(config)?;
    let templates = Templates::load(&config.build.templates)?;
    let pages = render::render_site(config, &templates, &shops)?;
    Ok((shops, pages))
}

/// Generate the whole site into the output directory.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    let (shops, pages) = render_all(config)?;
    let output = OutputDir::new(&config.build.output);

    if config.build.clean {
        output.clean()?;
    }

    log!("build"; "writing {} pages to {}", pages.len(), output.root().display());
    for page in &pages {
        output.write(&page.path, &page.contents)?;
    }

    let pruned = output.prune_stale(shops.iter().map(|shop| shop.id.as_str()))?;
    log!("done"; "{} shops, {} files, {} stale removed", shops.len(), pages.len(), pruned.len());

    Ok(BuildReport {
        shops: shops.len(),
        written: pages.len(),
        pruned,
    })
}

/// One `id<TAB>name` line per shop, in data order.
pub fn listing(shops: &[Shop]) -> String {
    shops
        .iter()
        .map(|shop| format!("{}\t{}\n", shop.id, shop.name))
        .collect()
}

/// Validate data and templates without touching the output directory.
pub fn check_site(config: &SiteConfig) -> Result<usize> {
    let (shops, pages) = render_all(config)?;
    log!("check"; "{} shops, {} pages render cleanly", shops.len(), pages.len());
    Ok(shops.len())
}
