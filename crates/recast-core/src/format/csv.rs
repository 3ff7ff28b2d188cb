//! CSV adapter
//!
//! A naive comma-split implementation: no quoting or escaping rules. The
//! header line names the columns; each data row becomes one mapping under a
//! top-level `rows` sequence. Serialization emits the top-level keys as the
//! header and their flattened text as a single data row.
//!
//! Copyright (c) 2026 Recast Team
//! Licensed under the Apache-2.0 license

use super::{DataFormat, FormatAdapter};
use crate::error::{Error, Result};
use crate::record::Record;
use std::collections::BTreeMap;

pub struct CsvAdapter;

impl FormatAdapter for CsvAdapter {
    fn format(&self) -> DataFormat {
        DataFormat::Csv
    }

    fn parse(&self, input: &str) -> Result<Record> {
        let mut lines = input.lines().filter(|line| !line.trim().is_empty());
        let header = lines.next().ok_or_else(|| Error::Parse {
            format: DataFormat::Csv,
            message: "input has no header line".to_string(),
            source: None,
        })?;
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();

        let rows: Vec<Record> = lines
            .map(|line| {
                let fields: BTreeMap<String, Record> = columns
                    .iter()
                    .zip(line.split(','))
                    .map(|(column, cell)| (column.to_string(), Record::scalar(cell.trim())))
                    .collect();
                Record::Mapping(fields)
            })
            .collect();

        let mut fields = BTreeMap::new();
        fields.insert("rows".to_string(), Record::Sequence(rows));
        Ok(Record::Mapping(fields))
    }

    fn serialize(&self, record: &Record) -> String {
        match record {
            Record::Mapping(fields) => {
                let header: Vec<&str> = fields.keys().map(String::as_str).collect();
                let row: Vec<String> = fields.values().map(Record::flat_text).collect();
                format!("{}\n{}", header.join(","), row.join(","))
            }
            other => other.flat_text(),
        }
    }
}
