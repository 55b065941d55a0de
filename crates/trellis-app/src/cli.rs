use std::path::PathBuf;

use clap::{Parser, Subcommand};
use trellis_common::Platform;

/// Trellis: breadcrumb collapsing and keyboard shortcut tools.
#[derive(Parser, Debug)]
#[command(name = "trellis", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. "trellis=debug").
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Collapse a breadcrumb trail given as labels, root first.
    Collapse {
        /// Visible item budget. Defaults to `breadcrumbs.max_visible`.
        #[arg(short = 'n', long)]
        max_visible: Option<usize>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,

        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Print the display label for a combo such as "mod+shift+P".
    Label {
        /// apple or other. Defaults to `shortcuts.platform`.
        #[arg(long)]
        platform: Option<Platform>,

        combo: String,
    },

    /// Check whether a key event triggers a combo.
    Match {
        #[arg(long)]
        platform: Option<Platform>,

        /// DOM key value of the event: "e", "Enter", " ", "F5".
        #[arg(long)]
        key: String,

        #[arg(long)]
        meta: bool,

        #[arg(long)]
        ctrl: bool,

        #[arg(long)]
        alt: bool,

        #[arg(long)]
        shift: bool,

        /// Tag name of the focused element, e.g. "input".
        #[arg(long)]
        target: Option<String>,

        /// Treat the focused element as contenteditable.
        #[arg(long)]
        content_editable: bool,

        combo: String,
    },

    /// List configured shortcut bindings with their labels.
    Bindings {
        #[arg(long)]
        platform: Option<Platform>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
