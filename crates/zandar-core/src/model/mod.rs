pub mod link;
pub mod page;
pub mod widget;

pub use link::Link;
pub use page::Page;
pub use widget::{Widget, DEFAULT_COLUMN_ID, DEFAULT_WIDGET_TITLE};
