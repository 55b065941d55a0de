//! Host platform, as far as shortcut aliasing and glyphs are concerned.

use serde::{Deserialize, Serialize};

/// Apple platforms use Command for `mod` and symbol glyphs in labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Apple,
    Other,
}

impl Platform {
    /// Platform of the compile target. macOS and iOS count as Apple.
    pub fn current() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Platform::Apple
        } else {
            Platform::Other
        }
    }

    pub fn is_apple(self) -> bool {
        matches!(self, Platform::Apple)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Apple => f.write_str("apple"),
            Platform::Other => f.write_str("other"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apple" | "mac" | "macos" => Ok(Platform::Apple),
            "other" | "linux" | "windows" => Ok(Platform::Other),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}
