//! JSON adapter
//!
//! The one format with a real parser behind it: serde_json does the heavy
//! lifting and the result is converted into the intermediate record. The
//! pivot is always a mapping at the top level, so non-object documents get
//! wrapped under a synthetic key.
//!
//! Copyright (c) 2026 Recast Team
//! Licensed under the Apache-2.0 license

use super::{DataFormat, FormatAdapter};
use crate::error::{Error, Result};
use crate::record::Record;
use std::collections::BTreeMap;

pub struct JsonAdapter;

impl FormatAdapter for JsonAdapter {
    fn format(&self) -> DataFormat {
        DataFormat::Json
    }

    fn parse(&self, input: &str) -> Result<Record> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|err| Error::Parse {
            format: DataFormat::Json,
            message: err.to_string(),
            source: Some(err),
        })?;

        let record = Record::from_json(value).unwrap_or_else(Record::empty_mapping);
        Ok(match record {
            mapping @ Record::Mapping(_) => mapping,
            sequence @ Record::Sequence(_) => wrap("items", sequence),
            scalar @ Record::Scalar(_) => wrap("value", scalar),
        })
    }

    fn serialize(&self, record: &Record) -> String {
        record.to_json().to_string()
    }
}

fn wrap(key: &str, value: Record) -> Record {
    let mut fields = BTreeMap::new();
    fields.insert(key.to_string(), value);
    Record::Mapping(fields)
}
