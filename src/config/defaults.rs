//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "台中南屯早餐店專屬網站".into()
    }

    pub fn description() -> String {
        "每一家早餐店都有獨立的介紹網站，快速查看評分、地址與服務。".into()
    }

    pub fn language() -> String {
        "zh-Hant".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn data() -> PathBuf {
        "shops.toml".into()
    }

    pub fn output() -> PathBuf {
        "docs".into()
    }

    pub fn templates() -> PathBuf {
        "templates".into()
    }
}

// ============================================================================
// [render] Section Defaults
// ============================================================================

pub mod render {
    pub fn default_category() -> String {
        "早餐店".into()
    }

    pub fn card_placeholder() -> String {
        "https://via.placeholder.com/640x400?text=Breakfast+Shop".into()
    }

    pub fn hero_placeholder() -> String {
        "https://via.placeholder.com/960x640?text=Breakfast+Shop".into()
    }

    pub fn services_placeholder() -> String {
        "現場服務資訊待更新".into()
    }
}
