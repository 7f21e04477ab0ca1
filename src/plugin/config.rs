use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::IdHash;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Base URL must not be empty")]
    EmptyBaseUrl,
    #[error("Base URL must not end with '/': {0}")]
    TrailingSlash(String),
    #[error("Hash length must be between 1 and 40, got {0}")]
    InvalidHashLength(usize),
    #[error("Label must not be empty")]
    EmptyLabel,
    #[error("Option key must not be empty")]
    EmptyOptionKey,
    #[error("Invalid URL pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Deployment settings. Missing JSON fields fall back to [`VanilliconConfig::v1`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VanilliconConfig {
    pub base_url: String,
    pub hash_length: usize,
    pub default_id: u64,
    pub default_size: i64,
    /// Written back on deactivation if the setting still points at us.
    pub neutral_default: String,
    pub label: String,
    pub option_key: String,
}

impl VanilliconConfig {
    /// Vanillicon v1 as served by vanillicon.com.
    pub fn v1() -> Self {
        Self {
            base_url: "https://vanillicon.com".into(),
            hash_length: 32,
            default_id: 100,
            default_size: 50,
            neutral_default: "mystery".into(),
            label: "Vanillicon".into(),
            option_key: "avatar_default".into(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading Vanillicon config from {}", path.display());
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if self.base_url.ends_with('/') {
            return Err(ConfigError::TrailingSlash(self.base_url.clone()));
        }
        if self.hash_length == 0 || self.hash_length > IdHash::MAX_LEN {
            return Err(ConfigError::InvalidHashLength(self.hash_length));
        }
        if self.label.is_empty() {
            return Err(ConfigError::EmptyLabel);
        }
        if self.option_key.is_empty() {
            return Err(ConfigError::EmptyOptionKey);
        }
        Ok(())
    }
}

impl Default for VanilliconConfig {
    fn default() -> Self {
        Self::v1()
    }
}
