//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Recast CLI - convert and remap structured data between formats
///
/// Reads input in one format, optionally applies field-level mapping rules,
/// and writes the result in another format.
#[derive(Parser, Debug)]
#[command(
    name = "recast",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transform input from one format to another
    Transform(TransformArgs),

    /// List the supported data formats
    Formats,
}

/// Arguments for the transform command
#[derive(Parser, Debug)]
pub struct TransformArgs {
    /// Path to the input file, or '-' for stdin
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Source format (inferred from the input extension when omitted)
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub from: Option<String>,

    /// Target format
    #[arg(short = 't', long, value_name = "FORMAT")]
    pub to: String,

    /// Path to a JSON file holding an array of field mapping rules
    /// ({"sourceField", "targetField", "transformationRule"?})
    #[arg(short, long, value_name = "RULES_FILE")]
    pub rules: Option<PathBuf>,

    /// Output file path (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Effective verbosity level, with quiet folding to zero
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_parsing() {
        let cli = Cli::parse_from([
            "recast", "transform", "data.json", "--to", "csv", "--rules", "rules.json",
        ]);
        match cli.command {
            Commands::Transform(args) => {
                assert_eq!(args.input, PathBuf::from("data.json"));
                assert_eq!(args.to, "csv");
                assert!(args.from.is_none());
                assert_eq!(args.rules, Some(PathBuf::from("rules.json")));
            }
            _ => panic!("expected transform command"),
        }
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["recast", "-vv", "formats"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["recast", "--quiet", "formats"]);
        assert_eq!(cli.verbosity_level(), 0);
    }
}
