//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("cannot parse shopsite.toml")]
    Toml(#[from] toml::de::Error),

    #[error("bad shopsite.toml setting: {0}")]
    Validation(String),
}
