pub mod link_ops;
pub mod ordering;
pub mod page_ops;
pub mod store;
pub mod widget_ops;

pub use ordering::{next_order, reorder, sorted_by_order, GroupItem, Side};
pub use store::Store;

use crate::model::{Link, Page, Widget};

impl GroupItem for Page {
    fn item_id(&self) -> i64 {
        self.id
    }
    fn sort_order(&self) -> i64 {
        self.order
    }
}

impl GroupItem for Widget {
    fn item_id(&self) -> i64 {
        self.id
    }
    fn sort_order(&self) -> i64 {
        self.order
    }
}

impl GroupItem for Link {
    fn item_id(&self) -> i64 {
        self.id
    }
    fn sort_order(&self) -> i64 {
        self.order
    }
}
