//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    assert!(validate(&TrellisConfig::default()).is_ok());
}

#[test]
fn catches_max_visible_zero() {
    let mut config = TrellisConfig::default();
    config.breadcrumbs.max_visible = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("breadcrumbs.max_visible = 0"));
}

#[test]
fn catches_max_visible_too_large() {
    let mut config = TrellisConfig::default();
    config.breadcrumbs.max_visible = 51;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("breadcrumbs.max_visible"));
}

#[test]
fn catches_bad_binding() {
    let mut config = TrellisConfig::default();
    config
        .shortcuts
        .bindings
        .insert("broken".into(), "mod++".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("shortcuts.bindings.broken"));
}

#[test]
fn collects_all_errors() {
    let mut config = TrellisConfig::default();
    config.breadcrumbs.max_visible = 0;
    config
        .shortcuts
        .bindings
        .insert("again".into(), "mod+s".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("breadcrumbs.max_visible"));
    assert!(err.contains("duplicate shortcut"));
}
