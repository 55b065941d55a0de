use trellis_common::ShortcutError;

use super::types::{KeyToken, Modifier, Shortcut};
use crate::key_names::normalize_key_name;

/// Parses a combo string like `"mod+E"`, `"ctrl+shift+ArrowUp"` or
/// `"alt+space"` into a [`Shortcut`].
///
/// Modifier tokens are case-insensitive and may appear in any order;
/// repeating one has no effect. Exactly one other token must be present and
/// becomes the key. Anything else is rejected rather than guessed at.
pub fn parse_combo(combo: &str) -> Result<Shortcut, ShortcutError> {
    let combo = combo.trim();
    if combo.is_empty() {
        return Err(ShortcutError::Empty);
    }

    let mut mods = 0u8;
    let mut keys: Vec<&str> = Vec::new();

    for token in combo.split('+').map(str::trim) {
        if token.is_empty() {
            return Err(ShortcutError::EmptyToken(combo.to_string()));
        }
        match modifier_token(token) {
            Some(modifier) => mods |= modifier.bit(),
            None => keys.push(token),
        }
    }

    match keys.as_slice() {
        [] => Err(ShortcutError::MissingKey(combo.to_string())),
        [key] => Ok(Shortcut {
            mods,
            key: key_token(key),
        }),
        _ => Err(ShortcutError::MultipleKeys {
            combo: combo.to_string(),
            keys: keys.join(", "),
        }),
    }
}

impl TryFrom<String> for Shortcut {
    type Error = ShortcutError;

    fn try_from(combo: String) -> Result<Self, Self::Error> {
        parse_combo(&combo)
    }
}

fn modifier_token(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "mod" => Some(Modifier::Mod),
        "meta" | "cmd" | "command" => Some(Modifier::Meta),
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        _ => None,
    }
}

fn key_token(token: &str) -> KeyToken {
    if token.eq_ignore_ascii_case("space") {
        return KeyToken::Space;
    }

    let name = normalize_key_name(token);
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(' '), None) => KeyToken::Space,
        (Some(c), None) => KeyToken::Char(upper_char(c)),
        _ => KeyToken::Named(name),
    }
}

fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
