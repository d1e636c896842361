//! Treemerge CLI Binary
//!
//! Command-line interface for the treemerge lib directory merger.

use clap::Parser;
use std::process;
use treemerge::logging;
use treemerge::tooling::cli::{Cli, CliContext};

fn main() {
    let cli = Cli::parse();

    // Load configuration
    let context = match CliContext::new(cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    // CLI logging flags override config
    let mut logging_config = context.config().logging.clone();
    if let Some(level) = cli.log_level.clone() {
        logging_config.level = level;
    }
    if let Some(format) = cli.log_format.clone() {
        logging_config.format = format;
    }
    if let Some(output) = cli.log_output.clone() {
        logging_config.output = output;
    }
    if let Err(e) = logging::init_logging(Some(&logging_config)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    // Execute command
    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
