use super::KeyValueStorage;
use crate::base::page::Page;
use crate::config::{NotyConfig, DEFAULT_STORAGE_KEY};
use crate::error::StorageError;

/// Persists the whole page list as one JSON array under a single key.
///
/// There is no locking: two writers (e.g. two browser tabs) can overwrite
/// each other's list. The last write wins.
#[derive(Clone, Debug)]
pub struct PageListStore<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> PageListStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key<K: Into<String>>(storage: S, key: K) -> Self {
        PageListStore {
            storage,
            key: key.into(),
        }
    }

    pub fn from_config(storage: S, config: &NotyConfig) -> Self {
        Self::with_key(storage, config.storage_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current page list. Missing, unreadable or malformed data all read
    /// as an empty list.
    pub fn read(&self) -> Vec<Page> {
        let content = match self.storage.get(&self.key) {
            Ok(Some(content)) => content,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Unable to read \"{}\": {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Page>>(&content) {
            Ok(pages) => {
                log::debug!(
                    "Loaded {} pages from \"{}\"",
                    pages.len(),
                    self.key
                );
                pages
            }
            Err(e) => {
                log::warn!(
                    "Ignoring malformed value in \"{}\": {}",
                    self.key,
                    e
                );
                Vec::new()
            }
        }
    }

    /// Replace the persisted page list.
    pub fn write(&self, pages: &[Page]) -> Result<(), StorageError> {
        let content = serde_json::to_string(pages)?;
        match self.storage.set(&self.key, &content) {
            Ok(()) => {
                log::debug!("Saved {} pages to \"{}\"", pages.len(), self.key);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to save pages to \"{}\": {}", self.key, e);
                Err(e)
            }
        }
    }

    pub fn find(&self, page_id: &str) -> Option<Page> {
        self.read().into_iter().find(|page| page.id == page_id)
    }
}
