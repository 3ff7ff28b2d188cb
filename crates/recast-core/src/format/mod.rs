//! Format adapters: parse/serialize pairs per supported representation
//!
//! Each adapter turns raw text into the intermediate record and a record
//! back into text. Parsing may fail on malformed input; serialization is
//! total over well-formed records.
//!
//! Copyright (c) 2026 Recast Team
//! Licensed under the Apache-2.0 license

pub mod csv;
pub mod json;
pub mod text;
pub mod xml;

use crate::error::{Error, Result};
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported data formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Json,
    Xml,
    Csv,
    Txt,
}

impl DataFormat {
    /// All supported formats, in declaration order
    pub const ALL: [DataFormat; 4] = [
        DataFormat::Json,
        DataFormat::Xml,
        DataFormat::Csv,
        DataFormat::Txt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DataFormat::Json => "json",
            DataFormat::Xml => "xml",
            DataFormat::Csv => "csv",
            DataFormat::Txt => "txt",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DataFormat::Json => "application/json",
            DataFormat::Xml => "application/xml",
            DataFormat::Csv => "text/csv",
            DataFormat::Txt => "text/plain",
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            DataFormat::Json => &[".json"],
            DataFormat::Xml => &[".xml"],
            DataFormat::Csv => &[".csv"],
            DataFormat::Txt => &[".txt"],
        }
    }

    /// Look up a format by name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        DataFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name))
    }

    /// Look up a format by file extension, with or without the leading dot
    pub fn from_extension(extension: &str) -> Option<Self> {
        let normalized = extension.trim_start_matches('.').to_ascii_lowercase();
        let dotted = format!(".{}", normalized);
        DataFormat::ALL
            .into_iter()
            .find(|format| format.extensions().contains(&dotted.as_str()))
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parse/serialize capability implemented once per format
pub trait FormatAdapter: Send + Sync {
    fn format(&self) -> DataFormat;

    /// Parse raw text into a record. Fails with [`Error::Parse`] when the
    /// input does not conform to the format.
    fn parse(&self, input: &str) -> Result<Record>;

    /// Serialize a record to text. Total: never fails on a well-formed
    /// record.
    fn serialize(&self, record: &Record) -> String;
}

impl fmt::Debug for dyn FormatAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FormatAdapter").field(&self.format()).finish()
    }
}

/// Adapter for a known format
pub fn adapter_for(format: DataFormat) -> &'static dyn FormatAdapter {
    match format {
        DataFormat::Json => &json::JsonAdapter,
        DataFormat::Xml => &xml::XmlAdapter,
        DataFormat::Csv => &csv::CsvAdapter,
        DataFormat::Txt => &text::TextAdapter,
    }
}

/// Adapter looked up by format name; this is where an unknown format name
/// surfaces as an error.
pub fn adapter_for_name(name: &str) -> Result<&'static dyn FormatAdapter> {
    let format = DataFormat::from_name(name).ok_or_else(|| Error::UnsupportedFormat {
        name: name.to_string(),
    })?;
    Ok(adapter_for(format))
}
