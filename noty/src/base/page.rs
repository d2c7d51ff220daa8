use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub const UNTITLED_LABEL: &str = "Untitled";

/// A single user document.
///
/// `blocks` is owned by the editor and is kept as opaque JSON here. Pages
/// persisted with a missing or `null` `title` or `blocks` field load with an
/// empty title and no blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub blocks: Vec<Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[allow(clippy::new_without_default)]
impl Page {
    /// New empty page with a random (v4) identifier. Uniqueness across the
    /// page list relies on the randomness of the identifier alone.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            blocks: Vec::new(),
        }
    }

    pub fn with_id<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            blocks: Vec::new(),
        }
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_blocks(mut self, blocks: Vec<Value>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED_LABEL
        } else {
            &self.title
        }
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}
