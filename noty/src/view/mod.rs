mod navigator;
mod page_list_view;

pub use navigator::Navigator;
pub use page_list_view::{
    PageListRender, PageListView, PageRow, EMPTY_STATE_MESSAGE,
};
