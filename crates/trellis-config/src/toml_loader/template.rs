//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r#"# Trellis Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[breadcrumbs]
# Items shown before the middle of a trail collapses into an overflow menu.
# The first and last items always stay visible.
max_visible = 4            # 1-50

[shortcuts]
# "auto" detects the running system. "apple" maps mod to Command and
# renders glyph labels; "other" maps mod to Control.
platform = "auto"          # auto | apple | other
# Skip shortcuts while focus is in an input, textarea, select or
# contenteditable element.
ignore_while_typing = true

[shortcuts.bindings]
# action = "modifiers+key"
# Modifiers: mod, meta, ctrl, alt (option), shift.
save = "mod+S"
search = "mod+K"
undo = "mod+Z"
redo = "mod+shift+Z"
delete = "mod+Backspace"

[logging]
level = "info"             # trace | debug | info | warn | error
"#
}
