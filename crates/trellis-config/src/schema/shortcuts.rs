//! Keyboard shortcut configuration types.
//!
//! Named bindings map an action name to a combo string such as `"mod+S"`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trellis_common::Platform;

/// Which platform conventions to use for `mod` and labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformSetting {
    /// Detect from the running system.
    #[default]
    Auto,
    Apple,
    Other,
}

impl PlatformSetting {
    pub fn resolve(self) -> Platform {
        match self {
            PlatformSetting::Auto => Platform::current(),
            PlatformSetting::Apple => Platform::Apple,
            PlatformSetting::Other => Platform::Other,
        }
    }
}

impl From<Platform> for PlatformSetting {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Apple => PlatformSetting::Apple,
            Platform::Other => PlatformSetting::Other,
        }
    }
}

/// Keyboard shortcuts configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutsConfig {
    pub platform: PlatformSetting,
    /// Skip shortcuts while focus is in a text field.
    pub ignore_while_typing: bool,
    /// Action name -> combo string.
    pub bindings: BTreeMap<String, String>,
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        let bindings = [
            ("save", "mod+S"),
            ("search", "mod+K"),
            ("undo", "mod+Z"),
            ("redo", "mod+shift+Z"),
            ("delete", "mod+Backspace"),
        ]
        .into_iter()
        .map(|(name, combo)| (name.to_string(), combo.to_string()))
        .collect();

        Self {
            platform: PlatformSetting::Auto,
            ignore_while_typing: true,
            bindings,
        }
    }
}
