mod page_detail;
mod page_list;

pub use page_detail::PageDetail;
pub use page_list::PageList;
