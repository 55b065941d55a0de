pub mod collapse;
pub mod item;

pub use collapse::{collapse, CollapseResult, Segment};
pub use item::{BreadcrumbItem, NavigationTarget};
