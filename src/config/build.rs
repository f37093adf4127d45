//! `[build]` section configuration.
//!
//! Input and output locations of a generation run.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in shopsite.toml.
///
/// # Example
/// ```toml
/// [build]
/// data = "google-2026-01-01.csv"   # or a `.toml` shop list
/// output = "docs"
/// templates = "templates"
/// clean = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root", skip_serializing_if = "Option::is_none")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Shop data file.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Site output directory, served verbatim by the static host.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Directory holding optional template overrides.
    #[serde(default = "defaults::build::templates")]
    #[educe(Default = defaults::build::templates())]
    pub templates: PathBuf,

    /// Remove the whole output directory before writing.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.root, None);
        assert_eq!(config.build.data, PathBuf::from("shops.toml"));
        assert_eq!(config.build.output, PathBuf::from("docs"));
        assert_eq!(config.build.templates, PathBuf::from("templates"));
        assert!(!config.build.clean);
    }

    #[test]
    fn test_build_config_custom() {
        let config = r#"
            [build]
            data = "google-2026-01-01.csv"
            output = "public"
            clean = true
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.data, PathBuf::from("google-2026-01-01.csv"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.clean);
    }

    #[test]
    fn test_build_config_unknown_field() {
        let config = r#"
            [build]
            minify = true
        "#;
        assert!(toml::from_str::<SiteConfig>(config).is_err());
    }
}
