mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use tracing_subscriber::util::SubscriberInitExt;
use trellis_common::ConfigError;
use trellis_config::TrellisConfig;
use trellis_platform::{KeyEvent, KeyTarget};

use cli::{Args, Command};
use commands::MatchInput;

fn load_config(args: &Args) -> Result<TrellisConfig, ConfigError> {
    match &args.config {
        Some(path) => trellis_config::load_config_from(path),
        None => trellis_config::load_config(),
    }
}

fn run(args: Args, config: &TrellisConfig) -> trellis_common::Result<String> {
    match args.command {
        Command::Collapse {
            max_visible,
            json,
            labels,
        } => commands::run_collapse(config, max_visible, json, &labels),
        Command::Label { platform, combo } => Ok(commands::run_label(config, platform, &combo)),
        Command::Match {
            platform,
            key,
            meta,
            ctrl,
            alt,
            shift,
            target,
            content_editable,
            combo,
        } => {
            let target = match target {
                Some(tag) if content_editable => KeyTarget::content_editable(tag),
                Some(tag) => KeyTarget::element(tag),
                None if content_editable => KeyTarget::content_editable("div"),
                None => KeyTarget::Document,
            };
            let input = MatchInput {
                event: KeyEvent::from_parts(key, meta, ctrl, alt, shift),
                target,
                combo: &combo,
            };
            let matched = commands::run_match(config, platform, input)?;
            Ok(if matched { "match" } else { "no match" }.to_string())
        }
        Command::Bindings { platform } => Ok(commands::run_bindings(config, platform)),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    let directive = args
        .log_level
        .as_deref()
        .unwrap_or(logging::DEFAULT_LOG_DIRECTIVE);
    let (subscriber, filter_handle) = logging::subscriber(directive, std::io::stderr, true);
    subscriber.init();

    let config = load_config(&args).unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        TrellisConfig::default()
    });
    // --log-level wins over the config file.
    if args.log_level.is_none() {
        logging::apply_level(&filter_handle, config.logging.level);
    }

    match run(args, &config) {
        Ok(out) => {
            if !out.is_empty() {
                println!("{out}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
