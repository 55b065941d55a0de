//! Configuration schema types for Trellis.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod breadcrumbs;
mod logging;
mod shortcuts;

pub use breadcrumbs::*;
pub use logging::*;
pub use shortcuts::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Trellis.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrellisConfig {
    pub breadcrumbs: BreadcrumbsConfig,
    pub shortcuts: ShortcutsConfig,
    pub logging: LoggingConfig,
}
