//! Recast CLI - convert and remap structured data between formats
//!
//! This is the main entry point for the Recast CLI application, a thin
//! driver over the recast-core transformation pipeline.

mod cli;
mod handlers;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};
use colored::{control, Colorize};
use std::process;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Set up colored output
    if cli.no_color {
        control::set_override(false);
    }

    // Initialize logging
    logging::init(cli.verbosity_level());

    // Run the application
    match run(cli) {
        Ok(()) => process::exit(0),
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            process::exit(1);
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> anyhow::Result<()> {
    tracing::debug!(command = ?cli.command, "executing command");
    match cli.command {
        Commands::Transform(args) => handlers::handle_transform(args),
        Commands::Formats => handlers::handle_formats(),
    }
}
