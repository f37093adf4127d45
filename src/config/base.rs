//! `[base]` section configuration.
//!
//! Site-wide text shown on every page.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in shopsite.toml - site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "台中南屯早餐店專屬網站"
/// description = "每一家早餐店都有獨立的介紹網站"
/// language = "zh-Hant"
/// footer = "資料來源：google-2026-01-01.csv"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Heading of the index page.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Lead paragraph under the index heading.
    #[serde(default = "defaults::base::description")]
    #[educe(Default = defaults::base::description())]
    pub description: String,

    /// BCP 47 language code for `<html lang>`.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Footer line on every page. Empty means "資料來源：<data file name>".
    #[serde(default)]
    pub footer: String,
}
