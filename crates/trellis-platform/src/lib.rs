pub mod input;
pub mod key_names;
pub mod keymap;

pub use input::{BindingId, BindingOptions, KeyEvent, KeyTarget, ShortcutRegistry};
pub use key_names::normalize_key_name;
pub use keymap::{format_label, matches, parse_combo, KeyToken, Modifier, RequiredModifiers, Shortcut};
pub use trellis_common::Platform;
