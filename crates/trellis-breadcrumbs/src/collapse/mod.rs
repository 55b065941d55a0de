//! Breadcrumb auto-collapse: keep the root and the tail, fold the middle.

mod operations;
mod types;

pub use operations::collapse;
pub use types::*;
