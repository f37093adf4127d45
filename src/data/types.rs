//! Shop record types.

use super::DataError;
use crate::utils::slug;
use std::{fmt, ops::Deref};

/// Filesystem- and URL-safe shop identifier.
///
/// Names the shop's directory under `shops/`, so construction is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShopId(String);

impl ShopId {
    /// Accept an explicit identifier if it passes [`slug::is_valid_id`].
    pub fn new(id: impl Into<String>) -> Result<Self, DataError> {
        let id = id.into();
        if slug::is_valid_id(&id) {
            Ok(Self(id))
        } else {
            Err(DataError::InvalidId(id))
        }
    }

    /// Derive an identifier from a display name.
    pub fn from_name(name: &str) -> Self {
        Self(slug::slugify(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ShopId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single shop, ready for rendering.
///
/// Descriptive fields may be empty; the renderer substitutes configured
/// fallbacks where the page needs something to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub map_link: String,
    pub rating: String,
    pub reviews: String,
    pub price: String,
    pub category: String,
    pub address: String,
    pub status: String,
    pub hours: String,
    pub image: String,
    /// Only set for absolute `http(s)` links.
    pub order_link: Option<String>,
    pub services: Vec<String>,
}

impl Default for ShopId {
    fn default() -> Self {
        Self::from_name("")
    }
}

impl Shop {
    /// Minimal shop with an explicit id, mostly for tests.
    #[cfg(test)]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: ShopId::new(id).unwrap(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Keep an order link only when it is an absolute web link.
pub fn order_link(value: &str) -> Option<String> {
    value.starts_with("http").then(|| value.to_owned())
}

/// Trim a raw field and replace ideographic spaces with ASCII ones.
pub fn clean_value(value: &str) -> String {
    value.trim().replace('\u{3000}', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_id_new_valid() {
        let id = ShopId::new("morning-cafe").unwrap();
        assert_eq!(id.as_str(), "morning-cafe");
        assert_eq!(id.to_string(), "morning-cafe");
    }

    #[test]
    fn test_shop_id_new_rejects_path_traversal() {
        assert!(matches!(ShopId::new("../etc"), Err(DataError::InvalidId(_))));
        assert!(ShopId::new("a/b").is_err());
        assert!(ShopId::new("").is_err());
    }

    #[test]
    fn test_shop_id_from_name_is_valid() {
        let id = ShopId::from_name("美而美 早餐");
        assert!(ShopId::new(id.as_str()).is_ok());
    }

    #[test]
    fn test_order_link() {
        assert_eq!(
            order_link("https://order.example/x"),
            Some("https://order.example/x".into())
        );
        assert_eq!(order_link("訂餐"), None);
        assert_eq!(order_link(""), None);
    }

    #[test]
    fn test_clean_value() {
        assert_eq!(clean_value("  早餐\u{3000}店 "), "早餐 店");
        assert_eq!(clean_value("\u{3000}"), "");
    }
}
