use serde::{Deserialize, Serialize};

/// Breadcrumb trail defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbsConfig {
    /// Items shown before the middle of the trail collapses (valid range: 1-50).
    pub max_visible: u32,
}

impl Default for BreadcrumbsConfig {
    fn default() -> Self {
        Self { max_visible: 4 }
    }
}
