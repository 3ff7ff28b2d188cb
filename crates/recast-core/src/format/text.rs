//! Plain-text adapter
//!
//! Parsing wraps the raw text under a `textData` key so mappings can still
//! address it. Serialization emits one `key=value` line per top-level
//! field, flattening nested values to a single line of text.
//!
//! Copyright (c) 2026 Recast Team
//! Licensed under the Apache-2.0 license

use super::{DataFormat, FormatAdapter};
use crate::error::Result;
use crate::record::Record;
use std::collections::BTreeMap;

pub struct TextAdapter;

impl FormatAdapter for TextAdapter {
    fn format(&self) -> DataFormat {
        DataFormat::Txt
    }

    fn parse(&self, input: &str) -> Result<Record> {
        let mut fields = BTreeMap::new();
        fields.insert("textData".to_string(), Record::scalar(input));
        Ok(Record::Mapping(fields))
    }

    fn serialize(&self, record: &Record) -> String {
        match record {
            Record::Mapping(fields) => fields
                .iter()
                .map(|(key, value)| format!("{}={}", key, value.flat_text()))
                .collect::<Vec<_>>()
                .join("\n"),
            other => other.flat_text(),
        }
    }
}
