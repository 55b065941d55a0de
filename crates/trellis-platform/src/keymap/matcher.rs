use tracing::warn;
use trellis_common::Platform;

use super::parse::parse_combo;
use super::types::{
    KeyToken, Modifier, RequiredModifiers, Shortcut, MOD_ALT, MOD_CTRL, MOD_META, MOD_MOD, MOD_SHIFT,
};
use crate::input::KeyEvent;
use crate::key_names::normalize_key_name;

impl Shortcut {
    /// Whether the combo lists `modifier`.
    pub fn has(&self, modifier: Modifier) -> bool {
        self.mods & modifier.bit() != 0
    }

    /// Resolve `mod` for `platform`: meta on Apple, ctrl elsewhere.
    pub fn required_modifiers(&self, platform: Platform) -> RequiredModifiers {
        let uses_mod = self.mods & MOD_MOD != 0;
        RequiredModifiers {
            meta: self.mods & MOD_META != 0 || (uses_mod && platform.is_apple()),
            ctrl: self.mods & MOD_CTRL != 0 || (uses_mod && !platform.is_apple()),
            alt: self.mods & MOD_ALT != 0,
            shift: self.mods & MOD_SHIFT != 0,
        }
    }

    /// True when `event` presses this key with exactly the required
    /// modifiers. An extra modifier held down fails the match.
    pub fn matches(&self, event: &KeyEvent, platform: Platform) -> bool {
        self.key.matches_key(&event.key) && self.required_modifiers(platform) == event.modifiers()
    }
}

impl KeyToken {
    /// Compare against a key name as reported by the host, ignoring case.
    pub fn matches_key(&self, event_key: &str) -> bool {
        let key = normalize_key_name(event_key);
        match self {
            KeyToken::Space => key == " ",
            KeyToken::Char(c) => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(k), None) => k.to_uppercase().eq(c.to_uppercase()),
                    _ => false,
                }
            }
            KeyToken::Named(name) => key.eq_ignore_ascii_case(name),
        }
    }
}

/// Test a key event against a combo string.
///
/// A malformed combo never matches; the parse error is logged. Callers that
/// check the same combo repeatedly should parse it once with
/// [`parse_combo`] and use [`Shortcut::matches`].
pub fn matches(event: &KeyEvent, combo: &str, platform: Platform) -> bool {
    match parse_combo(combo) {
        Ok(shortcut) => shortcut.matches(event, platform),
        Err(e) => {
            warn!("ignoring malformed shortcut: {e}");
            false
        }
    }
}
