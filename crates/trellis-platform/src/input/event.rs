use serde::{Deserialize, Serialize};

use crate::keymap::RequiredModifiers;

/// A key-down event as the host reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// DOM-style key value: `"e"`, `"Enter"`, `" "`, `"F5"`.
    pub key: String,
    #[serde(default)]
    pub meta: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
}

impl KeyEvent {
    /// An event with no modifiers held.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            meta: false,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    /// Build from raw modifier booleans, as a host event translator would.
    pub fn from_parts(key: impl Into<String>, meta: bool, ctrl: bool, alt: bool, shift: bool) -> Self {
        Self {
            key: key.into(),
            meta,
            ctrl,
            alt,
            shift,
        }
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn modifiers(&self) -> RequiredModifiers {
        RequiredModifiers {
            meta: self.meta,
            ctrl: self.ctrl,
            alt: self.alt,
            shift: self.shift,
        }
    }
}

/// The element that had focus when a key event fired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum KeyTarget {
    /// No focused element, or focus on the page itself.
    #[default]
    Document,
    Element {
        tag_name: String,
        content_editable: bool,
    },
}

impl KeyTarget {
    pub fn element(tag_name: impl Into<String>) -> Self {
        KeyTarget::Element {
            tag_name: tag_name.into(),
            content_editable: false,
        }
    }

    pub fn content_editable(tag_name: impl Into<String>) -> Self {
        KeyTarget::Element {
            tag_name: tag_name.into(),
            content_editable: true,
        }
    }

    /// Form fields and contenteditable elements receive typed text.
    pub fn is_text_editable(&self) -> bool {
        match self {
            KeyTarget::Document => false,
            KeyTarget::Element {
                tag_name,
                content_editable,
            } => {
                *content_editable
                    || ["input", "textarea", "select"]
                        .iter()
                        .any(|t| tag_name.eq_ignore_ascii_case(t))
            }
        }
    }
}
