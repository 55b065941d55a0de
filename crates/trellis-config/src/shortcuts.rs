//! Shortcut binding validation and registry construction.

use std::collections::{BTreeMap, HashMap};

use trellis_common::{ConfigError, Platform};
use trellis_platform::{
    parse_combo, BindingOptions, KeyToken, RequiredModifiers, Shortcut, ShortcutRegistry,
};

use crate::schema::ShortcutsConfig;

/// Check that every binding parses and no two bindings share a combo.
///
/// Combos are compared after `mod` is resolved, on both platforms, so
/// `mod+S` and `meta+S` collide (on Apple) even though the strings differ.
pub fn validate_bindings(config: &ShortcutsConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    let mut parsed: Vec<(&str, &str, Shortcut)> = Vec::new();

    for (name, combo) in &config.bindings {
        match parse_combo(combo) {
            Ok(shortcut) => parsed.push((name.as_str(), combo.as_str(), shortcut)),
            Err(e) => errors.push(format!("shortcuts.bindings.{name}: {e}")),
        }
    }

    let mut clashes: BTreeMap<(&str, &str), (&str, Platform)> = BTreeMap::new();
    for platform in [Platform::Apple, Platform::Other] {
        let mut seen: HashMap<(RequiredModifiers, &KeyToken), &str> = HashMap::new();
        for (name, combo, shortcut) in &parsed {
            let key = (shortcut.required_modifiers(platform), &shortcut.key);
            if let Some(existing) = seen.get(&key) {
                clashes.entry((*existing, *name)).or_insert((*combo, platform));
            } else {
                seen.insert(key, *name);
            }
        }
    }

    for ((first, second), (combo, platform)) in clashes {
        errors.push(format!(
            "duplicate shortcut '{combo}': assigned to both '{first}' and '{second}' on {platform}"
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Build a registry of named bindings from the shortcut config.
///
/// Invalid combos are logged as warnings and skipped.
pub fn build_registry(config: &ShortcutsConfig) -> ShortcutRegistry<String> {
    let options = BindingOptions {
        ignore_while_typing: config.ignore_while_typing,
    };
    ShortcutRegistry::from_bindings(
        config.platform.resolve(),
        config
            .bindings
            .iter()
            .map(|(name, combo)| (name.clone(), combo.as_str())),
        options,
    )
}
