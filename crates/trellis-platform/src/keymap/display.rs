use std::fmt;

use trellis_common::Platform;

use super::types::{KeyToken, Modifier, Shortcut};
use crate::key_names::normalize_key_name;

/// Formats a combo string as a label for menus and tooltips.
///
/// On Apple platforms modifiers render as glyphs with no separator
/// (`"mod+E"` -> `"⌘E"`); elsewhere as names joined by `" + "`
/// (`"Ctrl + E"`). Other tokens have their key aliases folded (`Esc` ->
/// `Escape`) and are upper-cased, so the result agrees with
/// [`Shortcut::label`]. The combo is not validated.
pub fn format_label(combo: &str, platform: Platform) -> String {
    let parts: Vec<String> = combo
        .split('+')
        .map(|token| display_token(token.trim(), platform))
        .collect();
    join_display_parts(&parts, platform)
}

impl Shortcut {
    /// Label for a parsed shortcut, modifiers in canonical order.
    pub fn label(&self, platform: Platform) -> String {
        let mut parts: Vec<String> = Modifier::ALL
            .iter()
            .filter(|m| self.has(**m))
            .map(|m| display_token(m.token(), platform))
            .collect();

        parts.push(display_token(&self.key.combo_token(), platform));
        join_display_parts(&parts, platform)
    }
}

impl KeyToken {
    fn combo_token(&self) -> String {
        match self {
            KeyToken::Char(c) => c.to_string(),
            KeyToken::Named(name) => name.clone(),
            KeyToken::Space => "space".to_string(),
        }
    }
}

/// Canonical combo string: modifiers in [`Modifier::ALL`] order, then the
/// key. Parses back to an equal [`Shortcut`].
impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in Modifier::ALL.iter().filter(|m| self.has(**m)) {
            write!(f, "{}+", modifier.token())?;
        }
        f.write_str(&self.key.combo_token())
    }
}

impl From<Shortcut> for String {
    fn from(shortcut: Shortcut) -> Self {
        shortcut.to_string()
    }
}

fn display_token(token: &str, platform: Platform) -> String {
    let apple = platform.is_apple();
    match token.to_lowercase().as_str() {
        "mod" if apple => "\u{2318}".into(), // ⌘
        "mod" => "Ctrl".into(),
        "meta" | "cmd" | "command" => "\u{2318}".into(),
        "ctrl" | "control" => "Ctrl".into(),
        "alt" | "option" | "opt" if apple => "\u{2325}".into(), // ⌥
        "alt" | "option" | "opt" => "Alt".into(),
        "shift" if apple => "\u{21E7}".into(), // ⇧
        "shift" => "Shift".into(),
        "backspace" => "\u{232B}".into(), // ⌫
        "space" if apple => "\u{2423}".into(), // ␣
        "space" => "Space".into(),
        _ => match normalize_key_name(token).as_str() {
            " " => display_token("space", platform),
            name => name.to_uppercase(),
        },
    }
}

fn join_display_parts(parts: &[String], platform: Platform) -> String {
    if platform.is_apple() {
        parts.join("")
    } else {
        parts.join(" + ")
    }
}
