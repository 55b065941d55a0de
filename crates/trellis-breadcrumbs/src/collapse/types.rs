use serde::{Deserialize, Serialize};

use crate::item::BreadcrumbItem;

/// Outcome of collapsing a breadcrumb trail to a visible-item budget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollapseResult {
    /// Items rendered directly, in trail order.
    pub visible_items: Vec<BreadcrumbItem>,
    /// Items folded behind the overflow indicator, in trail order.
    pub collapsed_items: Vec<BreadcrumbItem>,
}

/// One drawable piece of a collapsed trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Item {
        item: &'a BreadcrumbItem,
        /// Set on the last item of the trail.
        current: bool,
    },
    /// The overflow indicator and the items it hides.
    Overflow(&'a [BreadcrumbItem]),
}
