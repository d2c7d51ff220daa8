pub(crate) mod base;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod storage;
pub(crate) mod view;

pub use base::page::{Page, UNTITLED_LABEL};
pub use base::routes::{page_route, PAGES_ROUTE};
pub use config::{NotyConfig, DEFAULT_STORAGE_KEY};
pub use error::{NotyError, StorageError};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
pub use storage::{KeyValueStorage, MemoryStorage, PageListStore};
pub use view::{
    Navigator, PageListRender, PageListView, PageRow, EMPTY_STATE_MESSAGE,
};
