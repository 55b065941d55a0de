//! `tracing` subscriber setup.
//!
//! The subscriber is installed before the config is read so the loader's
//! events are not dropped. Its filter sits behind a reload layer; once the
//! config is loaded, [`apply_level`] swaps in the configured level.

use tracing::Subscriber;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};
use trellis_config::schema::LogLevel;

pub const DEFAULT_LOG_DIRECTIVE: &str = "trellis=info";

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Builds the subscriber and the handle that can later replace its filter.
///
/// `directive` falls back to [`DEFAULT_LOG_DIRECTIVE`] when it does not parse.
/// `RUST_LOG` directives are always kept.
pub fn subscriber<W>(
    directive: &str,
    writer: W,
    ansi: bool,
) -> (impl Subscriber + Send + Sync + 'static, FilterHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(env_filter(directive));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(ansi));
    (subscriber, handle)
}

/// Replaces the active filter with the level from the config file.
pub fn apply_level(handle: &FilterHandle, level: LogLevel) {
    let directive = level.directive();
    match handle.reload(env_filter(directive)) {
        Ok(()) => tracing::debug!("log filter set to {directive} from config"),
        Err(e) => tracing::warn!("failed to apply config log level {directive}: {e}"),
    }
}

fn env_filter(directive: &str) -> EnvFilter {
    let directive: Result<Directive, _> = directive
        .parse()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse());
    match directive {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    }
}
