//! The transformation pipeline
//!
//! Ties the pieces together for one request: resolve both format adapters,
//! parse, optionally run the mapping engine, serialize. Format resolution
//! happens before any parsing so a structural error aborts the request with
//! no partial work.
//!
//! Copyright (c) 2026 Recast Team
//! Licensed under the Apache-2.0 license

use crate::config::MappingConfigurationStore;
use crate::error::Result;
use crate::format;
use crate::mapping::{self, FieldMapping};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// One transformation request.
///
/// Mapping input comes in one of two forms, mirroring the two entry points
/// of the engine: inline `mapping_rules` (the "advanced" request shape) or
/// a stored configuration referenced by `mapping_configuration_id`. Inline
/// rules take precedence when both are present. With neither, the parsed
/// record passes through unmapped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformRequest {
    pub input_data: String,
    pub source_format: String,
    pub target_format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping_configuration_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping_rules: Option<Vec<FieldMapping>>,
}

/// Result of a successful transformation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOutcome {
    pub output_data: String,
    pub duration_ms: u64,
}

/// Run one transformation request.
///
/// # Errors
///
/// Returns [`crate::Error::UnsupportedFormat`] when either format name has
/// no registered adapter, and [`crate::Error::Parse`] when the input does
/// not conform to the source format. Mapping itself never fails: unresolved
/// source paths skip their rules and a missing configuration is an empty
/// rule set.
pub fn transform(
    request: &TransformRequest,
    store: Option<&dyn MappingConfigurationStore>,
) -> Result<TransformOutcome> {
    let start = Instant::now();

    let source_adapter = format::adapter_for_name(&request.source_format)?;
    let target_adapter = format::adapter_for_name(&request.target_format)?;

    log::debug!(
        "transforming {} -> {}",
        source_adapter.format(),
        target_adapter.format()
    );

    let parsed = source_adapter.parse(&request.input_data)?;

    let record = if let Some(rules) = &request.mapping_rules {
        mapping::apply_mappings(&parsed, rules)
    } else if let (Some(id), Some(store)) = (request.mapping_configuration_id, store) {
        mapping::apply_configured_mappings(&parsed, store, id)
    } else {
        parsed
    };

    let output_data = target_adapter.serialize(&record);
    Ok(TransformOutcome {
        output_data,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}
