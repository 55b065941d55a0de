pub mod errors;
pub mod platform;

pub use errors::{ConfigError, ShortcutError, TrellisError};
pub use platform::Platform;

pub type Result<T> = std::result::Result<T, TrellisError>;
