use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};
use trellis_common::{Platform, ShortcutError};

use super::event::{KeyEvent, KeyTarget};
use crate::keymap::{parse_combo, Shortcut};

/// Handle for one mounted binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BindingId(u64);

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "binding-{}", self.0)
    }
}

/// Per-binding dispatch policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingOptions {
    /// Skip this binding while focus is in a text-editable element.
    pub ignore_while_typing: bool,
}

impl Default for BindingOptions {
    fn default() -> Self {
        Self {
            ignore_while_typing: true,
        }
    }
}

struct Binding<A> {
    shortcut: Shortcut,
    action: A,
    options: BindingOptions,
}

/// Live shortcut bindings for a mounted UI.
///
/// Each `mount` adds exactly one binding and `unmount` removes it, so a
/// component that mounts once can never fire twice for the same event.
pub struct ShortcutRegistry<A> {
    platform: Platform,
    next_id: u64,
    bindings: BTreeMap<BindingId, Binding<A>>,
}

impl<A> ShortcutRegistry<A> {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            next_id: 0,
            bindings: BTreeMap::new(),
        }
    }

    /// Build a registry from `(action, combo)` pairs.
    ///
    /// Invalid combos are logged as warnings and skipped.
    pub fn from_bindings<'a, I>(platform: Platform, bindings: I, options: BindingOptions) -> Self
    where
        I: IntoIterator<Item = (A, &'a str)>,
    {
        let mut registry = Self::new(platform);
        for (action, combo) in bindings {
            if let Err(e) = registry.mount(combo, action, options) {
                warn!("invalid shortcut '{combo}': {e}");
            }
        }
        registry
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Parse `combo` and add a binding for it.
    pub fn mount(
        &mut self,
        combo: &str,
        action: A,
        options: BindingOptions,
    ) -> Result<BindingId, ShortcutError> {
        let shortcut = parse_combo(combo)?;
        Ok(self.mount_shortcut(shortcut, action, options))
    }

    /// Add a binding for an already parsed shortcut.
    pub fn mount_shortcut(&mut self, shortcut: Shortcut, action: A, options: BindingOptions) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        debug!(%id, label = %shortcut.label(self.platform), "shortcut mounted");
        self.bindings.insert(
            id,
            Binding {
                shortcut,
                action,
                options,
            },
        );
        id
    }

    /// Remove a binding. Returns `false` if it was not mounted.
    pub fn unmount(&mut self, id: BindingId) -> bool {
        let removed = self.bindings.remove(&id).is_some();
        if removed {
            debug!(%id, "shortcut unmounted");
        }
        removed
    }

    /// Actions of every binding the event triggers, in mount order.
    pub fn dispatch(&self, event: &KeyEvent, target: &KeyTarget) -> Vec<&A> {
        let typing = target.is_text_editable();
        self.bindings
            .values()
            .filter(|b| !(typing && b.options.ignore_while_typing))
            .filter(|b| b.shortcut.matches(event, self.platform))
            .map(|b| &b.action)
            .collect()
    }

    /// Display label of a mounted binding.
    pub fn label_for(&self, id: BindingId) -> Option<String> {
        self.bindings.get(&id).map(|b| b.shortcut.label(self.platform))
    }

    /// All bindings in mount order.
    pub fn bindings(&self) -> impl Iterator<Item = (BindingId, &Shortcut, &A)> {
        self.bindings
            .iter()
            .map(|(id, b)| (*id, &b.shortcut, &b.action))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
