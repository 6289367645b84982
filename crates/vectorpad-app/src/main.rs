//! Main application entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::LevelFilter;

use vectorpad_app::Args;

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
        LevelFilter::Warn
    });

    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    log::info!("Starting VectorPad");
    log::debug!("Parsed arguments: {args:?}");

    if let Err(err) = vectorpad_app::run(&args) {
        log::error!("{err}");
        process::exit(1);
    }
}
