use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// A combo string that does not describe exactly one key plus modifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortcutError {
    #[error("empty shortcut combo")]
    Empty,

    #[error("empty token in shortcut combo '{0}'")]
    EmptyToken(String),

    #[error("shortcut combo '{0}' has no key")]
    MissingKey(String),

    #[error("shortcut combo '{combo}' has more than one key: {keys}")]
    MultipleKeys { combo: String, keys: String },
}

#[derive(Debug, thiserror::Error)]
pub enum TrellisError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Shortcut(#[from] ShortcutError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("breadcrumbs.max_visible = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: breadcrumbs.max_visible = 0"
        );
    }

    #[test]
    fn shortcut_error_display() {
        assert_eq!(ShortcutError::Empty.to_string(), "empty shortcut combo");

        let err = ShortcutError::EmptyToken("mod++".into());
        assert_eq!(err.to_string(), "empty token in shortcut combo 'mod++'");

        let err = ShortcutError::MissingKey("mod+shift".into());
        assert_eq!(err.to_string(), "shortcut combo 'mod+shift' has no key");

        let err = ShortcutError::MultipleKeys {
            combo: "a+b".into(),
            keys: "a, b".into(),
        };
        assert_eq!(
            err.to_string(),
            "shortcut combo 'a+b' has more than one key: a, b"
        );
    }

    #[test]
    fn trellis_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: TrellisError = config_err.into();
        assert!(matches!(err, TrellisError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn trellis_error_from_shortcut() {
        let err: TrellisError = ShortcutError::MissingKey("ctrl".into()).into();
        assert!(matches!(err, TrellisError::Shortcut(_)));
        assert!(err.to_string().contains("'ctrl'"));
    }

    #[test]
    fn trellis_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TrellisError = io_err.into();
        assert!(matches!(err, TrellisError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn trellis_error_other() {
        let err = TrellisError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
