use noty::{NotyConfig, PageListStore};

use crate::helpers::local_storage::BrowserStorage;

const CONFIG_YAML: &str = include_str!("../../config.yaml");

#[derive(Clone)]
pub struct GlobalState {
    pub config: NotyConfig,
    // None when the browser denies access to localStorage
    pub store: Option<PageListStore<BrowserStorage>>,
}

impl GlobalState {
    fn new() -> Self {
        let config = load_config(CONFIG_YAML);
        let store = match BrowserStorage::new() {
            Ok(storage) => Some(PageListStore::from_config(storage, &config)),
            Err(e) => {
                log::error!("Page storage disabled: {}", e);
                None
            }
        };
        Self { config, store }
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

fn load_config(content: &str) -> NotyConfig {
    NotyConfig::from_yaml(content).unwrap_or_else(|e| {
        log::warn!("Using default config: {}", e);
        NotyConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config() {
        let config = load_config(CONFIG_YAML);
        assert_eq!(config.storage_key, "noty:pages");
    }

    #[test]
    fn test_invalid_config_falls_back() {
        assert_eq!(load_config("storage_key: ["), NotyConfig::default());
    }
}
