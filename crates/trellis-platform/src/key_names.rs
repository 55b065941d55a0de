//! Key name normalization.
//!
//! Hosts report keys by their DOM-style `key` value (`"ArrowUp"`, `" "`,
//! `"Escape"`), but older hosts and hand-written combos use aliases such as
//! `"Up"`, `"Spacebar"` or `"Esc"`. Both sides are folded to the DOM names
//! before comparison.

/// Map a key name or alias to its canonical DOM `key` value.
///
/// Unknown names pass through unchanged, including single characters.
pub fn normalize_key_name(key: &str) -> String {
    match key.to_lowercase().as_str() {
        // Arrow keys
        "up" | "arrowup" => "ArrowUp".to_string(),
        "down" | "arrowdown" => "ArrowDown".to_string(),
        "left" | "arrowleft" => "ArrowLeft".to_string(),
        "right" | "arrowright" => "ArrowRight".to_string(),

        // Editing
        "esc" | "escape" => "Escape".to_string(),
        "del" | "delete" => "Delete".to_string(),
        "return" | "enter" => "Enter".to_string(),
        "backspace" => "Backspace".to_string(),
        "tab" => "Tab".to_string(),

        // Whitespace
        "spacebar" => " ".to_string(),

        _ => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_aliases() {
        assert_eq!(normalize_key_name("Up"), "ArrowUp");
        assert_eq!(normalize_key_name("down"), "ArrowDown");
        assert_eq!(normalize_key_name("ArrowLeft"), "ArrowLeft");
        assert_eq!(normalize_key_name("RIGHT"), "ArrowRight");
    }

    #[test]
    fn editing_aliases() {
        assert_eq!(normalize_key_name("Esc"), "Escape");
        assert_eq!(normalize_key_name("escape"), "Escape");
        assert_eq!(normalize_key_name("Del"), "Delete");
        assert_eq!(normalize_key_name("Return"), "Enter");
        assert_eq!(normalize_key_name("backspace"), "Backspace");
    }

    #[test]
    fn legacy_spacebar_becomes_space_character() {
        assert_eq!(normalize_key_name("Spacebar"), " ");
        assert_eq!(normalize_key_name(" "), " ");
    }

    #[test]
    fn other_keys_pass_through() {
        assert_eq!(normalize_key_name("a"), "a");
        assert_eq!(normalize_key_name("F5"), "F5");
        assert_eq!(normalize_key_name("PageDown"), "PageDown");
        assert_eq!(normalize_key_name("."), ".");
    }
}
