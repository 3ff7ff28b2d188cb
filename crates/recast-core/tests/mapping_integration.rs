//! End-to-end integration tests for the transformation pipeline
//!
//! These tests drive the public API the way a host application would: raw
//! text in, mapped text out, with rules supplied inline or through a
//! configuration store.

use recast_core::{
    transform, DataFormat, FieldMapping, InMemoryConfigStore, MappingConfiguration,
    MappingConfigurationStore, TransformRequest,
};
use serde_json::{json, Value};

fn json_request(input: &str, rules: Vec<FieldMapping>) -> TransformRequest {
    TransformRequest {
        input_data: input.to_string(),
        source_format: "json".to_string(),
        target_format: "json".to_string(),
        mapping_configuration_id: None,
        mapping_rules: Some(rules),
    }
}

fn output_json(request: &TransformRequest) -> Value {
    let outcome = transform(request, None).expect("transformation should succeed");
    serde_json::from_str(&outcome.output_data).expect("output should be valid JSON")
}

#[test]
fn test_rename_and_nested_extraction_drops_unmapped_fields() {
    let request = json_request(
        r#"{"name": "John", "age": 30, "address": {"city": "NYC"}}"#,
        vec![
            FieldMapping::new("name", "fullName"),
            FieldMapping::with_rule("address.city", "location", "uppercase"),
        ],
    );

    assert_eq!(
        output_json(&request),
        json!({"fullName": "John", "location": "NYC"})
    );
}

#[test]
fn test_array_broadcast_into_target_array() {
    let request = json_request(
        r#"{"users": [{"name": "A", "role": "admin"}, {"name": "B", "role": "user"}]}"#,
        vec![FieldMapping::new("users[].name", "names")],
    );

    assert_eq!(output_json(&request), json!({"names": ["A", "B"]}));
}

#[test]
fn test_single_element_collection_unwraps() {
    let request = json_request(
        r#"{"users": [{"name": "Only"}]}"#,
        vec![FieldMapping::new("users[].name", "owner.name")],
    );

    assert_eq!(output_json(&request), json!({"owner": {"name": "Only"}}));
}

#[test]
fn test_shared_field_after_marker_broadcasts() {
    let request = json_request(
        r#"{"orders": [{"item": {"sku": "A1"}}, {"item": {"sku": "B2"}}]}"#,
        vec![FieldMapping::new("orders[].item.sku", "skus")],
    );

    assert_eq!(output_json(&request), json!({"skus": ["A1", "B2"]}));
}

#[test]
fn test_absent_paths_and_bogus_transforms_are_lenient() {
    let request = json_request(
        r#"{"name": "John"}"#,
        vec![
            FieldMapping::new("missing.field", "never.appears"),
            FieldMapping::with_rule("name", "name", "bogus-rule"),
        ],
    );

    assert_eq!(output_json(&request), json!({"name": "John"}));
}

#[test]
fn test_overlapping_targets_last_rule_wins() {
    let request = json_request(
        r#"{"first": "one", "second": "two"}"#,
        vec![
            FieldMapping::new("first", "x"),
            FieldMapping::new("second", "x"),
        ],
    );

    assert_eq!(output_json(&request), json!({"x": "two"}));
}

#[test]
fn test_csv_rows_mapped_to_json() {
    let request = TransformRequest {
        input_data: "name,city\nJohn,NYC\nJane,LA".to_string(),
        source_format: "csv".to_string(),
        target_format: "json".to_string(),
        mapping_configuration_id: None,
        mapping_rules: Some(vec![FieldMapping::new("rows[].name", "people")]),
    };

    let outcome = transform(&request, None).unwrap();
    assert_eq!(
        serde_json::from_str::<Value>(&outcome.output_data).unwrap(),
        json!({"people": ["John", "Jane"]})
    );
}

#[test]
fn test_json_to_xml_with_mapping() {
    let request = TransformRequest {
        input_data: r#"{"name": "John"}"#.to_string(),
        source_format: "json".to_string(),
        target_format: "xml".to_string(),
        mapping_configuration_id: None,
        mapping_rules: Some(vec![FieldMapping::with_rule("name", "fullName", "lowercase")]),
    };

    let outcome = transform(&request, None).unwrap();
    assert!(outcome.output_data.contains("<fullName>john</fullName>"));
}

#[test]
fn test_store_backed_configuration_round_trip() {
    let store = InMemoryConfigStore::new();
    let mut config = MappingConfiguration::new(
        "contacts",
        DataFormat::Json,
        DataFormat::Txt,
        vec![
            FieldMapping::new("name", "contact.name"),
            FieldMapping::with_rule("email", "contact.email", "lowercase"),
        ],
    );
    config.description = Some("contact card extraction".to_string());
    let saved = store.save(config);

    let request = TransformRequest {
        input_data: r#"{"name": "John", "email": "JOHN@EXAMPLE.COM"}"#.to_string(),
        source_format: "json".to_string(),
        target_format: "txt".to_string(),
        mapping_configuration_id: saved.id,
        mapping_rules: None,
    };

    let outcome = transform(&request, Some(&store)).unwrap();
    assert_eq!(
        outcome.output_data,
        "contact={\"email\":\"john@example.com\",\"name\":\"John\"}"
    );
}
