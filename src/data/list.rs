//! Hand-written shop list in TOML.
//!
//! ```toml
//! [[shops]]
//! id = "morning-cafe"        # optional, derived from name when absent
//! name = "Morning Café"
//! address = "1 Main St"
//! hours = "06:00-13:00"
//! services = ["dine-in", "takeaway"]
//! ```

use super::{
    DataError, Shop, ShopId,
    types::{clean_value, order_link},
};
use serde::Deserialize;
use std::path::Path;

/// Top level of the list file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ShopList {
    #[serde(default)]
    shops: Vec<ShopRecord>,
}

/// One `[[shops]]` entry as written by hand.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ShopRecord {
    id: Option<String>,
    name: Option<String>,
    map_link: String,
    rating: String,
    reviews: String,
    price: String,
    category: String,
    address: String,
    status: String,
    hours: String,
    image: String,
    order_link: String,
    services: Vec<String>,
}

/// Read a shop list file.
pub fn load(path: &Path) -> Result<Vec<Shop>, DataError> {
    let content =
        std::fs::read_to_string(path).map_err(|err| DataError::Io(path.to_path_buf(), err))?;
    let list: ShopList =
        toml::from_str(&content).map_err(|err| DataError::Toml(path.to_path_buf(), err))?;

    list.shops
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_shop(index + 1))
        .collect()
}

impl ShopRecord {
    /// Validate and convert; `index` is 1-based for messages.
    fn into_shop(self, index: usize) -> Result<Shop, DataError> {
        let name = self.name.as_deref().map(clean_value).unwrap_or_default();
        if name.is_empty() {
            return Err(DataError::InvalidRecord {
                index,
                reason: "`name` is missing or blank".into(),
            });
        }

        let id = match self.id.as_deref().map(str::trim) {
            Some(id) => ShopId::new(id)?,
            None => ShopId::from_name(&name),
        };

        let services = self
            .services
            .iter()
            .map(|service| clean_value(service))
            .filter(|service| !service.is_empty())
            .collect();

        Ok(Shop {
            id,
            name,
            map_link: clean_value(&self.map_link),
            rating: clean_value(&self.rating),
            reviews: clean_value(&self.reviews),
            price: clean_value(&self.price),
            category: clean_value(&self.category),
            address: clean_value(&self.address),
            status: clean_value(&self.status),
            hours: clean_value(&self.hours),
            image: clean_value(&self.image),
            order_link: order_link(&clean_value(&self.order_link)),
            services,
        })
    }
}
