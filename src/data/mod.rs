//! Shop data loading.
//!
//! The data file format is chosen by extension:
//!
//! | Extension | Reader | Layout |
//! |-----------|--------|--------|
//! | `.csv`  | [`maps`] | Google Maps listing export |
//! | `.toml` | [`list`] | hand-written `[[shops]]` list |
//!
//! Both readers yield shops in file order. [`load_shops`] then checks that
//! identifiers are unique, since each one names an output directory.

pub mod list;
pub mod maps;
mod types;

pub use types::{Shop, ShopId};

use crate::log;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors raised while reading or validating shop data
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read shop data `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("CSV parsing error in `{0}`")]
    Csv(PathBuf, #[source] ::csv::Error),

    #[error("TOML parsing error in `{0}`")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("shop #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("invalid shop id `{0}`: use lowercase letters, digits and single dashes")]
    InvalidId(String),

    #[error("duplicate shop id `{id}` used by `{first}` and `{second}`")]
    DuplicateId {
        id: ShopId,
        first: String,
        second: String,
    },

    #[error("unsupported data file `{0}`: expected .csv or .toml")]
    UnsupportedFormat(PathBuf),
}

/// Load every shop from `path` and check identifier uniqueness.
pub fn load_shops(path: &Path) -> Result<Vec<Shop>, DataError> {
    let shops = match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => maps::load(path)?,
        Some("toml") => list::load(path)?,
        _ => return Err(DataError::UnsupportedFormat(path.to_path_buf())),
    };

    ensure_unique_ids(&shops)?;
    log!("data"; "loaded {} shops from {}", shops.len(), file_name(path));
    Ok(shops)
}

/// Fail on the first identifier used by two shops.
pub fn ensure_unique_ids(shops: &[Shop]) -> Result<(), DataError> {
    let mut seen: HashMap<&ShopId, &str> = HashMap::with_capacity(shops.len());
    for shop in shops {
        if let Some(first) = seen.insert(&shop.id, shop.name.as_str()) {
            return Err(DataError::DuplicateId {
                id: shop.id.clone(),
                first: first.to_owned(),
                second: shop.name.clone(),
            });
        }
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
