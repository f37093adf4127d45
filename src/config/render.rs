//! `[render]` section configuration.
//!
//! Fallback text and images for shop fields the data leaves empty.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[render]` section in shopsite.toml.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Category label for shops without one.
    #[serde(default = "defaults::render::default_category")]
    #[educe(Default = defaults::render::default_category())]
    pub default_category: String,

    /// Image on index cards for shops without a photo.
    #[serde(default = "defaults::render::card_placeholder")]
    #[educe(Default = defaults::render::card_placeholder())]
    pub card_placeholder: String,

    /// Image on shop pages for shops without a photo.
    #[serde(default = "defaults::render::hero_placeholder")]
    #[educe(Default = defaults::render::hero_placeholder())]
    pub hero_placeholder: String,

    /// Services line for shops that list none.
    #[serde(default = "defaults::render::services_placeholder")]
    #[educe(Default = defaults::render::services_placeholder())]
    pub services_placeholder: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_render_config_partial_override() {
        let config = r#"
            [render]
            default_category = "Cafe"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.render.default_category, "Cafe");
        assert_eq!(config.render.services_placeholder, "現場服務資訊待更新");
        assert!(config.render.card_placeholder.contains("640x400"));
        assert!(config.render.hero_placeholder.contains("960x640"));
    }
}
