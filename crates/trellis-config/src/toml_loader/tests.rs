//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{LogLevel, PlatformSetting, TrellisConfig};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_trellis_config.toml"));
    assert!(matches!(
        result,
        Err(trellis_common::ConfigError::FileNotFound(_))
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[breadcrumbs]
max_visible = 3

[shortcuts]
platform = "apple"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.breadcrumbs.max_visible, 3);
    assert_eq!(config.shortcuts.platform, PlatformSetting::Apple);
    // Defaults preserved
    assert!(config.shortcuts.ignore_while_typing);
    assert_eq!(config.shortcuts.bindings.len(), 5);
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn bindings_table_replaces_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[shortcuts.bindings]
palette = "mod+shift+P"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.shortcuts.bindings.len(), 1);
    assert_eq!(config.shortcuts.bindings["palette"], "mod+shift+P");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result,
        Err(trellis_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn unknown_log_level_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    assert!(matches!(
        load_from_path(&path),
        Err(trellis_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn load_config_with_invalid_values_returns_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[breadcrumbs]\nmax_visible = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.breadcrumbs.max_visible, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trellis").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, TrellisConfig::default());
}

#[test]
fn load_or_create_writes_template_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trellis").join("config.toml");
    assert!(!path.exists());

    let config = load_or_create(&path).unwrap();
    assert_eq!(config, TrellisConfig::default());
    assert!(path.exists());

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[breadcrumbs]"));
}

#[test]
fn load_or_create_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[breadcrumbs]\nmax_visible = 7\n").unwrap();

    let config = load_or_create(&path).unwrap();
    assert_eq!(config.breadcrumbs.max_visible, 7);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[breadcrumbs]\nmax_visible = 7\n"
    );
}

#[test]
fn load_or_create_propagates_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[breadcrumbs\n").unwrap();

    assert!(matches!(
        load_or_create(&path),
        Err(trellis_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;

    let config: TrellisConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config, TrellisConfig::default());
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("trellis"));
        assert!(path_str.ends_with("config.toml"));
    }
}
