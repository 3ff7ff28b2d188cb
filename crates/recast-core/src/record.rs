//! The intermediate record: the universal pivot between formats
//!
//! Every parser produces a `Record` and every serializer consumes one, so
//! the mapping engine only ever deals with this single tree shape. The type
//! is a closed tagged union so traversal code gets compile-time
//! exhaustiveness over the three possible shapes.
//!
//! Copyright (c) 2026 Recast Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use std::collections::BTreeMap;

/// Format-agnostic tree value produced by parsing and consumed by
/// serialization.
///
/// Records are trees by construction (no cycles are expressible) and all
/// scalar leaves are text: converting between representations never coerces
/// types, it passes the lexical form through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A text leaf
    Scalar(String),
    /// An ordered list of records
    Sequence(Vec<Record>),
    /// A set of uniquely-keyed fields; key order is not significant
    Mapping(BTreeMap<String, Record>),
}

impl Record {
    /// Create an empty mapping, the starting point of every mapping pass
    pub fn empty_mapping() -> Self {
        Record::Mapping(BTreeMap::new())
    }

    /// Create a scalar from anything string-like
    pub fn scalar(text: impl Into<String>) -> Self {
        Record::Scalar(text.into())
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Record::Scalar(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Record::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Record::Mapping(_))
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Record::Scalar(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Record]> {
        match self {
            Record::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Record>> {
        match self {
            Record::Mapping(fields) => Some(fields),
            _ => None,
        }
    }

    /// Convert a parsed JSON value into a record.
    ///
    /// Numbers and booleans are rendered to their lexical form. `null` has
    /// no record representation: a `null` field or element is dropped, which
    /// makes it indistinguishable from an absent field during mapping (a
    /// rule reading it is skipped).
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(flag) => Some(Record::Scalar(flag.to_string())),
            Value::Number(number) => Some(Record::Scalar(number.to_string())),
            Value::String(text) => Some(Record::Scalar(text)),
            Value::Array(items) => Some(Record::Sequence(
                items.into_iter().filter_map(Record::from_json).collect(),
            )),
            Value::Object(fields) => Some(Record::Mapping(
                fields
                    .into_iter()
                    .filter_map(|(key, value)| Record::from_json(value).map(|v| (key, v)))
                    .collect(),
            )),
        }
    }

    /// Render the record as a JSON value. Scalars always come out as JSON
    /// strings; there is no attempt to re-detect numbers or booleans.
    pub fn to_json(&self) -> Value {
        match self {
            Record::Scalar(text) => Value::String(text.clone()),
            Record::Sequence(items) => Value::Array(items.iter().map(Record::to_json).collect()),
            Record::Mapping(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }

    /// Flatten the record to a single line of text, used by the line-oriented
    /// serializers (CSV cells, TXT values). Sequences join their flattened
    /// elements with `; `; mappings fall back to compact JSON.
    pub fn flat_text(&self) -> String {
        match self {
            Record::Scalar(text) => text.clone(),
            Record::Sequence(items) => items
                .iter()
                .map(Record::flat_text)
                .collect::<Vec<_>>()
                .join("; "),
            Record::Mapping(_) => self.to_json().to_string(),
        }
    }
}

impl From<&str> for Record {
    fn from(text: &str) -> Self {
        Record::Scalar(text.to_string())
    }
}

impl From<String> for Record {
    fn from(text: String) -> Self {
        Record::Scalar(text)
    }
}
