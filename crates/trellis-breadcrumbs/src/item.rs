//! Breadcrumb items: one entry in a navigation path.

use serde::{Deserialize, Serialize};

/// Where selecting a breadcrumb takes the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum NavigationTarget {
    /// A URL to navigate to.
    Href(String),
    /// A named action the host dispatches on selection.
    Action(String),
}

/// A single entry in a breadcrumb trail.
///
/// An item without a navigation target represents the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    /// Stable key, unique within a trail.
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<NavigationTarget>,
    #[serde(default)]
    pub disabled: bool,
}

impl BreadcrumbItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            target: None,
            disabled: false,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.target = Some(NavigationTarget::Href(href.into()));
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.target = Some(NavigationTarget::Action(action.into()));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether selecting this item should do anything.
    ///
    /// The current item is never interactive, even when it carries a target.
    pub fn is_interactive(&self, is_current: bool) -> bool {
        !is_current && !self.disabled && self.target.is_some()
    }
}
