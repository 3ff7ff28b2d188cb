//! Recast Core - Field-mapping engine for format-agnostic data transformation
//!
//! This crate provides the core functionality for converting structured data
//! between JSON, XML, CSV, and TXT representations, optionally applying
//! user-defined field-level mappings along the way.
//!
//! # Main Components
//!
//! - **Error Handling**: Structural error types using `thiserror`
//! - **Intermediate Record**: The format-agnostic tree value all parsers
//!   produce and all serializers consume
//! - **Path Resolver**: Dotted-path reads and writes over records, including
//!   `[]` array traversal and sequence broadcast
//! - **Field Mapping Engine**: Ordered application of source/target/transform
//!   rules producing a brand-new record
//! - **Format Adapters**: Parse/serialize pairs for each supported format
//!
//! # Example
//!
//! ```
//! use recast_core::{transform, TransformRequest};
//!
//! fn example() -> recast_core::Result<()> {
//!     let request = TransformRequest {
//!         input_data: r#"{"name": "John"}"#.to_string(),
//!         source_format: "json".to_string(),
//!         target_format: "json".to_string(),
//!         mapping_configuration_id: None,
//!         mapping_rules: None,
//!     };
//!     let outcome = transform(&request, None)?;
//!     assert!(outcome.output_data.contains("John"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod mapping;
pub mod pipeline;
pub mod record;

// Re-export main types for convenience
pub use config::{InMemoryConfigStore, MappingConfiguration, MappingConfigurationStore};
pub use error::{Error, Result};
pub use format::{adapter_for, adapter_for_name, DataFormat, FormatAdapter};
pub use mapping::{
    apply_configured_mappings, apply_mappings, FieldMapping, FieldPath, TransformRule,
};
pub use pipeline::{transform, TransformOutcome, TransformRequest};
pub use record::Record;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
