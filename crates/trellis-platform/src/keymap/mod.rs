//! Shortcut combos: parsing, labels, and matching against key events.

mod display;
mod matcher;
mod parse;
mod types;

pub use display::format_label;
pub use matcher::matches;
pub use parse::parse_combo;
pub use types::{KeyToken, Modifier, RequiredModifiers, Shortcut};
