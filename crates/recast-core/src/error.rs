//! Error types for the Recast core library
//!
//! This module defines the structural error taxonomy for transformation
//! requests, using thiserror for ergonomic error definitions.
//!
//! Everything that is not a structural failure is deliberately lenient and
//! never surfaces here: an unresolved source path skips its rule, an unknown
//! transform rule name is applied as identity, and a missing mapping
//! configuration is treated as an empty rule set.

use crate::format::DataFormat;
use thiserror::Error;

/// Main error type for Recast operations
#[derive(Error, Debug)]
pub enum Error {
    /// Source text does not conform to the claimed format
    #[error("Failed to parse {format} input: {message}")]
    Parse {
        format: DataFormat,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A format was requested that has no registered adapter
    #[error("Unsupported data format: '{name}'")]
    UnsupportedFormat { name: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;
