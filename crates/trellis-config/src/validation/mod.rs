//! Full configuration validation.
//!
//! Validates numeric ranges and shortcut bindings, collecting every
//! problem into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::TrellisConfig;
use crate::shortcuts;
use helpers::validate_range;
use trellis_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TrellisConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "breadcrumbs.max_visible",
        config.breadcrumbs.max_visible,
        1,
        50,
    );

    if let Err(ConfigError::ValidationError(e)) = shortcuts::validate_bindings(&config.shortcuts) {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
