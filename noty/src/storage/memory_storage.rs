use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::KeyValueStorage;
use crate::error::StorageError;

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    // when set, every write fails with this message
    write_failure: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage {
            items: RefCell::new(HashMap::new()),
            write_failure: RefCell::new(None),
            writes: Cell::new(0),
        }
    }

    pub fn with_item<K: Into<String>, V: Into<String>>(
        self,
        key: K,
        value: V,
    ) -> Self {
        self.items.borrow_mut().insert(key.into(), value.into());
        self
    }

    /// Make subsequent writes fail, e.g. to mimic an exceeded quota.
    pub fn fail_writes<S: Into<String>>(&self, reason: S) {
        *self.write_failure.borrow_mut() = Some(reason.into());
    }

    pub fn allow_writes(&self) {
        *self.write_failure.borrow_mut() = None;
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(reason) = self.write_failure.borrow().as_ref() {
            return Err(StorageError::Write(reason.clone()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
