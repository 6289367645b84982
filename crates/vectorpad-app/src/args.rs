//! Command-line arguments.

use clap::Parser;

/// Replay a recorded input script through the VectorPad editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the event script (JSON)
    #[arg(required_unless_present = "shortcuts")]
    pub script: Option<String>,

    /// Write the final editor state here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to an editor configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Print the keyboard shortcuts and exit
    #[arg(long)]
    pub shortcuts: bool,
}
