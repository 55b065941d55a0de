//! Key events and the registry that dispatches them to mounted bindings.

mod event;
mod registry;

pub use event::{KeyEvent, KeyTarget};
pub use registry::{BindingId, BindingOptions, ShortcutRegistry};
