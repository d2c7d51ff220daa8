use super::Navigator;
use crate::base::page::Page;
use crate::base::routes::page_route;
use crate::error::StorageError;
use crate::storage::{KeyValueStorage, PageListStore};

pub const EMPTY_STATE_MESSAGE: &str = "You don't have any pages yet.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRow {
    pub id: String,
    pub href: String,
    pub label: String,
    pub block_count: usize,
}

impl PageRow {
    fn from_page(page: &Page) -> Self {
        Self {
            id: page.id.clone(),
            href: page_route(&page.id),
            label: page.label().to_string(),
            block_count: page.block_count(),
        }
    }

    pub fn blocks_label(&self) -> String {
        format!("{} blocks", self.block_count)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageListRender {
    Empty { message: &'static str },
    Rows(Vec<PageRow>),
}

impl PageListRender {
    pub fn rows(&self) -> &[PageRow] {
        match self {
            PageListRender::Empty { .. } => &[],
            PageListRender::Rows(rows) => rows,
        }
    }
}

/// Page list as shown to the user, plus the create action.
pub struct PageListView<S: KeyValueStorage> {
    store: PageListStore<S>,
    pages: Vec<Page>,
}

impl<S: KeyValueStorage> PageListView<S> {
    pub fn new(store: PageListStore<S>) -> Self {
        let pages = store.read();
        Self { store, pages }
    }

    pub fn store(&self) -> &PageListStore<S> {
        &self.store
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn reload(&mut self) {
        self.pages = self.store.read();
    }

    pub fn render(&self) -> PageListRender {
        if self.pages.is_empty() {
            PageListRender::Empty {
                message: EMPTY_STATE_MESSAGE,
            }
        } else {
            PageListRender::Rows(
                self.pages.iter().map(PageRow::from_page).collect(),
            )
        }
    }

    /// Append a new empty page and persist the list.
    ///
    /// The list shown so far is only replaced once the write succeeded, so a
    /// failed write leaves both the view and the store as they were.
    pub fn insert_page(&mut self) -> Result<Page, StorageError> {
        let mut pages = self.pages.clone();
        let page = Page::new();
        pages.push(page.clone());

        self.store.write(&pages)?;
        log::debug!("Created page {}", page.id);
        self.pages = pages;
        Ok(page)
    }

    /// Create a page and navigate to it. No navigation on failure.
    pub fn create<N: Navigator + ?Sized>(
        &mut self,
        navigator: &N,
    ) -> Result<Page, StorageError> {
        let page = self.insert_page()?;
        navigator.navigate(&page_route(&page.id));
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::json;

    use super::*;
    use crate::storage::MemoryStorage;

    #[derive(Default)]
    struct RecordingNavigator {
        paths: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.paths.borrow_mut().push(path.to_string());
        }
    }

    fn view_with(pages: &[Page]) -> PageListView<MemoryStorage> {
        let store = PageListStore::new(MemoryStorage::new());
        store.write(pages).unwrap();
        PageListView::new(store)
    }

    #[test]
    fn test_empty_store() {
        let view = PageListView::new(PageListStore::new(MemoryStorage::new()));
        let render = view.render();
        assert_eq!(
            render,
            PageListRender::Empty {
                message: "You don't have any pages yet."
            }
        );
        assert!(render.rows().is_empty());
    }

    #[test]
    fn test_rows_in_stored_order() {
        let pages: Vec<Page> = (0..5)
            .map(|i| {
                Page::with_id(format!("p{}", i)).with_title(format!("T{}", i))
            })
            .collect();
        let view = view_with(&pages);

        let render = view.render();
        let ids: Vec<&str> =
            render.rows().iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["p0", "p1", "p2", "p3", "p4"]);
        assert_eq!(render.rows()[3].href, "/pages/p3");
        assert_eq!(render.rows()[3].label, "T3");
    }

    #[test]
    fn test_row_labels() {
        let view = view_with(&[
            Page::with_id("a"),
            Page::with_id("b")
                .with_title("Plans")
                .with_blocks(vec![json!({}), json!({})]),
        ]);
        let render = view.render();
        let rows = render.rows();

        assert_eq!(rows[0].label, "Untitled");
        assert_eq!(rows[0].blocks_label(), "0 blocks");
        assert_eq!(rows[1].label, "Plans");
        assert_eq!(rows[1].blocks_label(), "2 blocks");
    }

    #[test]
    fn test_missing_blocks_renders_zero() {
        let storage = MemoryStorage::new()
            .with_item("noty:pages", r#"[{"id": "a", "title": "Old"}]"#);
        let view = PageListView::new(PageListStore::new(storage));
        assert_eq!(view.render().rows()[0].blocks_label(), "0 blocks");
    }

    #[test]
    fn test_null_fields_keep_existing_pages() {
        let storage = MemoryStorage::new().with_item(
            "noty:pages",
            r#"[
                {"id": "a", "title": "Keep", "blocks": []},
                {"id": "b", "title": null, "blocks": null}
            ]"#,
        );
        let mut view = PageListView::new(PageListStore::new(storage));

        let render = view.render();
        let rows = render.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Keep");
        assert_eq!(rows[1].label, "Untitled");
        assert_eq!(rows[1].blocks_label(), "0 blocks");

        let created = view.insert_page().unwrap();
        let ids: Vec<String> =
            view.store().read().into_iter().map(|page| page.id).collect();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string(), created.id]);
    }

    #[test]
    fn test_create_once() {
        let mut view =
            PageListView::new(PageListStore::new(MemoryStorage::new()));
        let navigator = RecordingNavigator::default();

        let page = view.create(&navigator).unwrap();

        let persisted = view.store().read();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0], page);
        assert!(!page.id.is_empty());
        assert_eq!(page.title, "");
        assert!(page.blocks.is_empty());
        assert_eq!(
            *navigator.paths.borrow(),
            vec![format!("/pages/{}", page.id)]
        );
    }

    #[test]
    fn test_create_twice() {
        let mut view =
            PageListView::new(PageListStore::new(MemoryStorage::new()));
        let navigator = RecordingNavigator::default();

        let first = view.create(&navigator).unwrap();
        let snapshot = view.pages().to_vec();
        let second = view.create(&navigator).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(snapshot, vec![first.clone()]);

        let persisted = view.store().read();
        assert_eq!(persisted, vec![first, second]);
        assert_eq!(view.pages(), persisted.as_slice());
        assert_eq!(navigator.paths.borrow().len(), 2);
    }

    #[test]
    fn test_create_appends_after_existing() {
        let existing = Page::with_id("kept").with_title("Keep me");
        let mut view = view_with(&[existing.clone()]);

        let created = view.insert_page().unwrap();

        let persisted = view.store().read();
        assert_eq!(persisted, vec![existing, created]);
    }

    #[test]
    fn test_create_write_failure() {
        let existing = Page::with_id("kept");
        let mut view = view_with(&[existing.clone()]);
        view.store().storage().fail_writes("quota exceeded");
        let navigator = RecordingNavigator::default();

        let result = view.create(&navigator);

        assert!(matches!(result, Err(StorageError::Write(_))));
        assert!(navigator.paths.borrow().is_empty());
        assert_eq!(view.pages(), &[existing.clone()]);
        assert_eq!(view.store().read(), vec![existing]);
    }

    #[test]
    fn test_closure_navigator() {
        let mut view =
            PageListView::new(PageListStore::new(MemoryStorage::new()));
        let visited = RefCell::new(None::<String>);
        let navigate = |path: &str| {
            *visited.borrow_mut() = Some(path.to_string());
        };

        let page = view.create(&navigate).unwrap();
        assert_eq!(*visited.borrow(), Some(format!("/pages/{}", page.id)));
    }

    #[test]
    fn test_reload_picks_up_external_writes() {
        let mut view =
            PageListView::new(PageListStore::new(MemoryStorage::new()));
        view.store().write(&[Page::with_id("other-tab")]).unwrap();
        assert!(view.pages().is_empty());

        view.reload();
        assert_eq!(view.pages()[0].id, "other-tab");
    }
}
