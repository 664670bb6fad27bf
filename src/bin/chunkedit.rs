//! Chunkedit CLI Binary
//!
//! Loads configuration, starts logging, connects to the graph once, and runs
//! the requested command (the interactive session by default).

use chunkedit::config::ConfigLoader;
use chunkedit::logging::init_logging;
use chunkedit::tooling::cli::{Cli, CliContext};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let logging = config.logging.clone().with_overrides(&cli.logging_overrides());
    if let Err(e) = init_logging(Some(&logging)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    // Connect once at startup; missing connection settings fail here.
    let context = match CliContext::from_config(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command_or_default()) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
