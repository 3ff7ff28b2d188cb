//! Field mapping engine
//!
//! This module applies an ordered list of field mapping rules to a source
//! record, producing a brand-new target record. The source is never mutated
//! and rules run strictly in the order the caller supplies them; a later
//! rule writing to the same target path overwrites an earlier one.
//!
//! Copyright (c) 2026 Recast Team
//! Licensed under the Apache-2.0 license

pub mod path;
pub mod resolver;
pub mod transform;

pub use path::{FieldPath, Segment};
pub use resolver::{resolve_read, resolve_write};
pub use transform::TransformRule;

use crate::config::MappingConfigurationStore;
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single field mapping rule: read `source_field`, optionally transform,
/// write `target_field`.
///
/// The serde shape matches the request payload:
/// `{ "sourceField": ..., "targetField": ..., "transformationRule": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    pub source_field: String,
    pub target_field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformation_rule: Option<String>,
}

impl FieldMapping {
    pub fn new(source_field: impl Into<String>, target_field: impl Into<String>) -> Self {
        FieldMapping {
            source_field: source_field.into(),
            target_field: target_field.into(),
            transformation_rule: None,
        }
    }

    pub fn with_rule(
        source_field: impl Into<String>,
        target_field: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        FieldMapping {
            source_field: source_field.into(),
            target_field: target_field.into(),
            transformation_rule: Some(rule.into()),
        }
    }
}

/// Apply mapping rules in order against `source`, returning the accumulated
/// target record.
///
/// The target starts as an empty mapping: fields of the source that no rule
/// maps never appear in the output. A rule whose source path resolves to
/// absent is skipped entirely and creates no target key.
pub fn apply_mappings(source: &Record, rules: &[FieldMapping]) -> Record {
    let mut target = BTreeMap::new();

    for rule in rules {
        let source_path = FieldPath::parse(&rule.source_field);
        let mut value = match resolver::resolve_read(source, &source_path) {
            Some(value) => value,
            None => {
                log::debug!(
                    "source path '{}' resolved to nothing, skipping rule",
                    rule.source_field
                );
                continue;
            }
        };

        if let Some(rule_name) = rule
            .transformation_rule
            .as_deref()
            .filter(|name| !name.is_empty())
        {
            value = TransformRule::from_name(rule_name).apply(value);
        }

        let target_path = FieldPath::parse(&rule.target_field);
        resolver::resolve_write(&mut target, &target_path, value);
    }

    Record::Mapping(target)
}

/// Apply the rules stored in a mapping configuration, looked up by id.
///
/// A configuration that cannot be found is treated as an empty rule set,
/// yielding an empty mapping rather than an error. Callers that need
/// stricter behavior should check existence beforehand.
pub fn apply_configured_mappings(
    source: &Record,
    store: &dyn MappingConfigurationStore,
    configuration_id: u64,
) -> Record {
    match store.find_by_id(configuration_id) {
        Some(configuration) => apply_mappings(source, &configuration.field_mappings),
        None => {
            log::debug!(
                "mapping configuration {} not found, applying empty rule set",
                configuration_id
            );
            Record::empty_mapping()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InMemoryConfigStore, MappingConfiguration, MappingConfigurationStore};
    use crate::format::DataFormat;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        Record::from_json(value).expect("test fixture converts")
    }

    #[test]
    fn test_empty_rules_produce_empty_mapping() {
        let source = record(json!({"name": "John", "age": 30}));
        assert_eq!(apply_mappings(&source, &[]), Record::empty_mapping());
    }

    #[test]
    fn test_unmapped_fields_are_dropped() {
        let source = record(json!({"name": "John", "age": 30, "address": {"city": "NYC"}}));
        let rules = vec![
            FieldMapping::new("name", "fullName"),
            FieldMapping::with_rule("address.city", "location", "uppercase"),
        ];

        let target = apply_mappings(&source, &rules);
        assert_eq!(
            target,
            record(json!({"fullName": "John", "location": "NYC"}))
        );
    }

    #[test]
    fn test_absent_source_creates_no_target_key() {
        let source = record(json!({"name": "John"}));
        let rules = vec![FieldMapping::new("missing.field", "anything.here")];

        let target = apply_mappings(&source, &rules);
        assert_eq!(target, Record::empty_mapping());
    }

    #[test]
    fn test_overlapping_targets_last_rule_wins() {
        let source = record(json!({"a": "first", "b": "second"}));
        let rules = vec![
            FieldMapping::new("a", "x"),
            FieldMapping::new("b", "x"),
        ];

        let target = apply_mappings(&source, &rules);
        assert_eq!(target, record(json!({"x": "second"})));
    }

    #[test]
    fn test_empty_transformation_rule_is_ignored() {
        let mut rule = FieldMapping::new("name", "out");
        rule.transformation_rule = Some(String::new());
        let source = record(json!({"name": "John"}));

        let target = apply_mappings(&source, &[rule]);
        assert_eq!(target, record(json!({"out": "John"})));
    }

    #[test]
    fn test_broadcast_read_lands_as_sequence() {
        let source = record(json!({"users": [{"name": "A"}, {"name": "B"}]}));
        let rules = vec![FieldMapping::new("users[].name", "names")];

        let target = apply_mappings(&source, &rules);
        assert_eq!(target, record(json!({"names": ["A", "B"]})));
    }

    #[test]
    fn test_single_element_broadcast_unwraps_on_write() {
        let source = record(json!({"users": [{"name": "A"}]}));
        let rules = vec![FieldMapping::new("users[].name", "name")];

        let target = apply_mappings(&source, &rules);
        assert_eq!(target, record(json!({"name": "A"})));
    }

    #[test]
    fn test_source_is_not_mutated() {
        let source = record(json!({"name": "  padded  "}));
        let before = source.clone();
        let rules = vec![FieldMapping::with_rule("name", "name", "trim")];

        let _ = apply_mappings(&source, &rules);
        assert_eq!(source, before);
    }

    #[test]
    fn test_configured_mappings_found() {
        let store = InMemoryConfigStore::new();
        let saved = store.save(MappingConfiguration::new(
            "demo",
            DataFormat::Json,
            DataFormat::Json,
            vec![FieldMapping::new("name", "fullName")],
        ));

        let source = record(json!({"name": "John"}));
        let target =
            apply_configured_mappings(&source, &store, saved.id.expect("saved id assigned"));
        assert_eq!(target, record(json!({"fullName": "John"})));
    }

    #[test]
    fn test_configured_mappings_missing_config_is_empty_rule_set() {
        let store = InMemoryConfigStore::new();
        let source = record(json!({"name": "John"}));

        let target = apply_configured_mappings(&source, &store, 42);
        assert_eq!(target, Record::empty_mapping());
    }

    #[test]
    fn test_field_mapping_request_shape() {
        let rule: FieldMapping = serde_json::from_value(json!({
            "sourceField": "a",
            "targetField": "b",
            "transformationRule": "trim"
        }))
        .unwrap();
        assert_eq!(rule, FieldMapping::with_rule("a", "b", "trim"));

        let bare: FieldMapping =
            serde_json::from_value(json!({"sourceField": "a", "targetField": "b"})).unwrap();
        assert_eq!(bare.transformation_rule, None);
    }
}
