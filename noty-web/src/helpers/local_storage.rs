use noty::{KeyValueStorage, StorageError};
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

/// `window.localStorage` as key-value storage for the page list.
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    pub fn new() -> Result<Self, StorageError> {
        let window = window().ok_or_else(|| {
            StorageError::Unavailable(
                "Unable to access window object.".to_string(),
            )
        })?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StorageError::Unavailable(
                "localStorage is not available.".to_string(),
            )),
            Err(e) => Err(StorageError::Unavailable(js_message(&e))),
        }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Read(js_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // throws e.g. QuotaExceededError
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_message(&e)))
    }
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use noty::{Page, PageListStore};
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_get_set() {
        let key = "noty:test_browser_storage_get_set";
        let storage = BrowserStorage::new().unwrap();

        storage.set(key, "[]").unwrap();
        assert_eq!(storage.get(key).unwrap(), Some("[]".to_string()));
        assert_eq!(
            storage.get("noty:test_browser_storage_missing").unwrap(),
            None
        );
    }

    #[wasm_bindgen_test]
    fn test_page_list_round_trip() {
        let key = "noty:test_browser_storage_round_trip";
        let store =
            PageListStore::with_key(BrowserStorage::new().unwrap(), key);
        let pages = vec![Page::new(), Page::with_id("b").with_title("Two")];

        store.write(&pages).unwrap();
        assert_eq!(store.read(), pages);
    }

    #[wasm_bindgen_test]
    fn test_malformed_reads_empty() {
        let key = "noty:test_browser_storage_malformed";
        let storage = BrowserStorage::new().unwrap();
        storage.set(key, "{not json").unwrap();

        assert!(PageListStore::with_key(storage, key).read().is_empty());
    }
}
