use serde::{Deserialize, Serialize};

pub(super) const MOD_MOD: u8 = 0b00001;
pub(super) const MOD_META: u8 = 0b00010;
pub(super) const MOD_CTRL: u8 = 0b00100;
pub(super) const MOD_ALT: u8 = 0b01000;
pub(super) const MOD_SHIFT: u8 = 0b10000;

/// A modifier token as written in a combo string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// Platform-abstract: Command on Apple platforms, Control elsewhere.
    Mod,
    /// Command / Windows / Super key.
    Meta,
    Ctrl,
    /// Alt key (Option on Apple platforms).
    Alt,
    Shift,
}

impl Modifier {
    pub const ALL: [Modifier; 5] = [
        Modifier::Mod,
        Modifier::Meta,
        Modifier::Ctrl,
        Modifier::Alt,
        Modifier::Shift,
    ];

    pub(super) fn bit(self) -> u8 {
        match self {
            Modifier::Mod => MOD_MOD,
            Modifier::Meta => MOD_META,
            Modifier::Ctrl => MOD_CTRL,
            Modifier::Alt => MOD_ALT,
            Modifier::Shift => MOD_SHIFT,
        }
    }

    /// Canonical combo token for this modifier.
    pub fn token(self) -> &'static str {
        match self {
            Modifier::Mod => "mod",
            Modifier::Meta => "meta",
            Modifier::Ctrl => "ctrl",
            Modifier::Alt => "alt",
            Modifier::Shift => "shift",
        }
    }
}

/// The single non-modifier key of a combo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyToken {
    /// A single printable character, stored upper-cased.
    Char(char),
    /// A named key such as `Enter`, `ArrowUp` or `F5`.
    Named(String),
    /// The space bar.
    Space,
}

/// A parsed combo string: a modifier set plus exactly one key.
///
/// `mod` is kept unresolved until a platform is known. Serializes as its
/// canonical combo string and deserializes through [`parse_combo`], so a
/// deserialized value never carries bits outside the five modifier flags.
///
/// [`parse_combo`]: super::parse_combo
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Shortcut {
    pub(super) mods: u8,
    pub key: KeyToken,
}

/// Modifier flags a key event must carry, with `mod` resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RequiredModifiers {
    pub meta: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}
