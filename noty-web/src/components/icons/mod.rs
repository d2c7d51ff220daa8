mod page_icon;

pub use page_icon::PageIcon;
