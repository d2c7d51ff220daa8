use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::NotyError;

pub const DEFAULT_STORAGE_KEY: &str = "noty:pages";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotyConfig {
    pub storage_key: String,
    // only used by file-backed storage
    pub data_dir: Option<PathBuf>,
}

impl Default for NotyConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
        }
    }
}

impl NotyConfig {
    pub fn from_yaml(content: &str) -> Result<Self, NotyError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: NotyConfig = serde_yaml::from_str(content)?;
        if config.storage_key.trim().is_empty() {
            return Err(NotyError::Config(
                "storage_key must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn with_storage_key<S: Into<String>>(mut self, key: S) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_data_dir<P: Into<PathBuf>>(mut self, data_dir: P) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }
}
