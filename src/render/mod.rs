//! Page rendering.
//!
//! # Architecture
//!
//! ```text
//! render_site()
//!     │
//!     ├── render_index()  ──► index.html            (card.html per shop)
//!     ├── render_shop()   ──► shops/<id>/index.html (once per shop)
//!     └── styles          ──► assets/styles.css
//! ```
//!
//! Rendering is pure: the same config, templates and shops always give the
//! same pages, which keeps reruns byte-identical.

mod builtin;
mod pages;
pub mod template;

pub use pages::{render_index, render_shop};
pub use template::{Template, TemplateError};

use crate::{config::SiteConfig, data::Shop, log};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Output subdirectory holding one directory per shop
pub const SHOPS_DIR: &str = "shops";

/// Stylesheet location relative to the output root
pub const STYLES_PATH: &str = "assets/styles.css";

/// File name of every generated page
const PAGE_FILE: &str = "index.html";

/// Override file names in the templates directory
const INDEX_TEMPLATE: &str = "index.html";
const CARD_TEMPLATE: &str = "card.html";
const SHOP_TEMPLATE: &str = "shop.html";
const STYLES_FILE: &str = "styles.css";

/// The templates and stylesheet used for one run.
#[derive(Debug, Clone)]
pub struct Templates {
    pub index: Template,
    pub card: Template,
    pub shop: Template,
    pub styles: String,
}

/// A rendered file and its location relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: PathBuf,
    pub contents: String,
}

impl Templates {
    /// Templates compiled into the binary.
    pub fn builtin() -> Result<Self, TemplateError> {
        Ok(Self {
            index: Template::parse(INDEX_TEMPLATE, builtin::INDEX)?,
            card: Template::parse(CARD_TEMPLATE, builtin::CARD)?,
            shop: Template::parse(SHOP_TEMPLATE, builtin::SHOP)?,
            styles: builtin::STYLES.to_owned(),
        })
    }

    /// Built-in templates, each replaced by a same-named file in `dir` if present.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut templates = Self::builtin()?;

        for (name, slot) in [
            (INDEX_TEMPLATE, &mut templates.index),
            (CARD_TEMPLATE, &mut templates.card),
            (SHOP_TEMPLATE, &mut templates.shop),
        ] {
            if let Some(source) = Self::read_override(dir, name)? {
                *slot = Template::parse(name, &source)?;
            }
        }
        if let Some(styles) = Self::read_override(dir, STYLES_FILE)? {
            templates.styles = styles;
        }

        Ok(templates)
    }

    fn read_override(dir: &Path, name: &str) -> Result<Option<String>> {
        let path = dir.join(name);
        if !path.is_file() {
            return Ok(None);
        }
        log!("template"; "using {}", path.display());
        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read template {}", path.display()))?;
        Ok(Some(source))
    }
}

/// Output path of a shop page, relative to the output root.
pub fn shop_page_path(shop: &Shop) -> PathBuf {
    Path::new(SHOPS_DIR).join(shop.id.as_str()).join(PAGE_FILE)
}

/// Render every file of the site: index, stylesheet and one page per shop.
pub fn render_site(
    config: &SiteConfig,
    templates: &Templates,
    shops: &[Shop],
) -> Result<Vec<Page>, TemplateError> {
    let mut pages = Vec::with_capacity(shops.len() + 2);

    pages.push(Page {
        path: PathBuf::from(PAGE_FILE),
        contents: render_index(templates, config, shops)?,
    });
    pages.push(Page {
        path: PathBuf::from(STYLES_PATH),
        contents: templates.styles.clone(),
    });
    for shop in shops {
        pages.push(Page {
            path: shop_page_path(shop),
            contents: render_shop(templates, config, shop)?,
        });
    }

    Ok(pages)
}
