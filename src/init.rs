//! Project initialization.
//!
//! Writes a default `shopsite.toml` so the settings are visible and editable.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::fs;

/// Write the default config to `config.config_path`.
pub fn new_config(config: &SiteConfig) -> Result<()> {
    let path = &config.config_path;
    if path.exists() {
        bail!(
            "Config file `{}` already exists. Remove it manually or init in a different root.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_at(dir: &TempDir) -> SiteConfig {
        SiteConfig {
            config_path: dir.path().join("site/shopsite.toml"),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_new_config_writes_loadable_file() {
        let dir = TempDir::new().unwrap();
        let config = config_at(&dir);
        new_config(&config).unwrap();

        let loaded = SiteConfig::from_path(&config.config_path).unwrap();
        assert_eq!(loaded.build.data.to_str(), Some("shops.toml"));
        assert_eq!(loaded.render.default_category, "早餐店");
    }

    #[test]
    fn test_new_config_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let config = config_at(&dir);
        new_config(&config).unwrap();

        let err = new_config(&config).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
