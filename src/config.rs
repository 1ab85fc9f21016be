//! Command-line configuration

use std::path::PathBuf;

use clap::Parser;
use tui_dispatch_debug::DebugCliArgs;

use crate::api::DEFAULT_API_URL;

/// Weather lookup TUI for a local weather API
#[derive(Parser, Debug)]
#[command(name = "weatherapp")]
#[command(about = "Know your weather up to date")]
pub struct Args {
    /// Base URL of the weather API
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Location to look up right away
    #[arg(long, short)]
    pub location: Option<String>,

    /// File that receives diagnostic logs (the terminal belongs to the UI)
    #[arg(long, default_value = "weatherapp.log")]
    pub log_file: PathBuf,

    /// Log level for this crate, or full filter directives
    /// (`weatherapp=debug,reqwest=info`); RUST_LOG wins when set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(flatten)]
    pub debug: DebugCliArgs,
}
