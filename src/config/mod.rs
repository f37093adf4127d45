//! Site configuration management for `shopsite.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `[base]`    | Site text (title, description, language, footer)|
//! | `[build]`   | Data file, output and template directories      |
//! | `[render]`  | Fallbacks for empty shop fields                 |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "台中南屯早餐店專屬網站"
//!
//! [build]
//! data = "google-2026-01-01.csv"
//! output = "docs"
//!
//! [render]
//! default_category = "早餐店"
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod render;

pub use base::BaseConfig;
pub use build::BuildConfig;
pub use error::ConfigError;
pub use render::RenderConfig;

use crate::{cli::Cli, log};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Extensions accepted for `[build.data]`
const DATA_EXTENSIONS: &[&str] = &["csv", "toml"];

/// Root configuration structure representing shopsite.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site text
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Rendering fallbacks
    #[serde(default)]
    pub render: RenderConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load the config named by the CLI, apply CLI overrides and resolve paths.
    ///
    /// A missing config file is not an error: the defaults describe a
    /// `shops.toml` next to a `docs/` output directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            if !cli.is_init() {
                log!("config"; "{} not found, using defaults", cli.config.display());
            }
            Self::default()
        };
        config.update_with_cli(cli);
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Footer text, derived from the data file name when not configured.
    pub fn footer(&self) -> String {
        if !self.base.footer.is_empty() {
            return self.base.footer.clone();
        }
        let source = self
            .build
            .data
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("資料來源：{source}")
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.data, cli.data.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        Self::update_option(&mut self.build.templates, cli.templates.as_ref());
        if cli.clean() {
            self.build.clean = true;
        }

        self.update_path_with_root(&root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths against root and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_name: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config_name));
        self.build.data = Self::normalize_path(&root.join(&self.build.data));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.templates = Self::normalize_path(&root.join(&self.build.templates));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before a generation run
    pub fn validate(&self) -> Result<()> {
        if self.base.title.trim().is_empty() {
            bail!(ConfigError::Validation("[base.title] must not be empty".into()));
        }

        // `clean` and stale-page pruning delete inside the output directory
        if self.get_root().starts_with(&self.build.output) {
            bail!(ConfigError::Validation(format!(
                "[build.output] `{}` must be a subdirectory of the project root",
                self.build.output.display()
            )));
        }

        for (key, path) in [
            ("[build.data]", &self.build.data),
            ("[build.templates]", &self.build.templates),
        ] {
            if path.starts_with(&self.build.output) {
                bail!(ConfigError::Validation(format!(
                    "{key} `{}` must not be inside the output directory",
                    path.display()
                )));
            }
        }

        let extension = self
            .build
            .data
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        if !DATA_EXTENSIONS.contains(&extension) {
            bail!(ConfigError::Validation(format!(
                "[build.data] `{}` must be a .csv or .toml file",
                self.build.data.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli_in(root: &Path, args: &[&str]) -> Cli {
        let mut argv = vec!["shopsite", "--root", root.to_str().unwrap()];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_from_str() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            title = "Morning"
            [build]
            output = "public"
        "#,
        )
        .unwrap();

        assert_eq!(config.base.title, "Morning");
        assert_eq!(config.build.output, PathBuf::from("public"));
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let err = SiteConfig::from_str("[base\ntitle = 1").unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        assert!(SiteConfig::from_str("[serve]\nport = 1").is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_footer_from_data_name() {
        let mut config = SiteConfig::default();
        config.build.data = PathBuf::from("/site/google-2026-01-01.csv");
        assert_eq!(config.footer(), "資料來源：google-2026-01-01.csv");

        config.base.footer = "Data: Google Maps".into();
        assert_eq!(config.footer(), "Data: Google Maps");
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load(&cli_in(dir.path(), &[])).unwrap();
        let root = dir.path().canonicalize().unwrap();

        assert_eq!(config.get_root(), root);
        assert_eq!(config.build.output, root.join("docs"));
        assert_eq!(config.build.data, root.join("shops.toml"));
        assert_eq!(config.config_path, root.join("shopsite.toml"));
    }

    #[test]
    fn test_load_reads_file_and_applies_cli_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("shopsite.toml"),
            "[build]\ndata = \"list.toml\"\noutput = \"site\"\n",
        )
        .unwrap();

        let cli = cli_in(dir.path(), &["-o", "public", "build", "--clean"]);
        let config = SiteConfig::load(&cli).unwrap();
        let root = dir.path().canonicalize().unwrap();

        assert_eq!(config.build.data, root.join("list.toml"));
        assert_eq!(config.build.output, root.join("public"));
        assert!(config.build.clean);
    }

    #[test]
    fn test_validate_default_config() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load(&cli_in(dir.path(), &[])).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_output_at_root() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load(&cli_in(dir.path(), &["-o", "."])).unwrap();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[build.output]"));
    }

    #[test]
    fn test_validate_rejects_unknown_data_format() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load(&cli_in(dir.path(), &["-d", "shops.json"])).unwrap();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[build.data]"));
    }

    #[test]
    fn test_validate_rejects_data_inside_output() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load(&cli_in(dir.path(), &["-d", "docs/shops.toml"])).unwrap();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[build.data]"));
        assert!(err.contains("inside the output directory"));
    }

    #[test]
    fn test_validate_rejects_templates_inside_output() {
        let dir = TempDir::new().unwrap();
        let cli = cli_in(dir.path(), &["-o", "public", "-t", "public/templates"]);
        let config = SiteConfig::load(&cli).unwrap();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[build.templates]"));
    }

    #[test]
    fn test_validate_allows_sibling_with_output_prefix() {
        // `docs-src` shares a string prefix with `docs` but is not inside it
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load(&cli_in(dir.path(), &["-t", "docs-src"])).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("shopsite.toml"), "[base]\ntitle = \" \"\n").unwrap();
        let config = SiteConfig::load(&cli_in(dir.path(), &[])).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&SiteConfig::default()).unwrap();
        let parsed = SiteConfig::from_str(&text).unwrap();
        assert_eq!(parsed.build.output, PathBuf::from("docs"));
        assert_eq!(parsed.base.language, "zh-Hant");
    }
}
