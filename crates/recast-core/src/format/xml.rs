//! XML adapter
//!
//! Parsing is a placeholder passthrough: the raw document lands under an
//! `xmlData` key so mappings can still address it as a field. Serialization
//! builds a `<root>` document directly, recursing through mappings as
//! nested elements and sequences as repeated `<item>` elements.
//!
//! Copyright (c) 2026 Recast Team
//! Licensed under the Apache-2.0 license

use super::{DataFormat, FormatAdapter};
use crate::error::Result;
use crate::record::Record;
use std::collections::BTreeMap;

pub struct XmlAdapter;

impl FormatAdapter for XmlAdapter {
    fn format(&self) -> DataFormat {
        DataFormat::Xml
    }

    fn parse(&self, input: &str) -> Result<Record> {
        let mut fields = BTreeMap::new();
        fields.insert("xmlData".to_string(), Record::scalar(input));
        Ok(Record::Mapping(fields))
    }

    fn serialize(&self, record: &Record) -> String {
        let mut output = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root>\n");
        match record {
            Record::Mapping(fields) => {
                for (key, value) in fields {
                    write_element(&mut output, key, value, 1);
                }
            }
            other => write_element(&mut output, "value", other, 1),
        }
        output.push_str("</root>");
        output
    }
}

fn write_element(output: &mut String, name: &str, value: &Record, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        Record::Scalar(text) => {
            output.push_str(&format!("{}<{}>{}</{}>\n", indent, name, escape(text), name));
        }
        Record::Sequence(items) => {
            output.push_str(&format!("{}<{}>\n", indent, name));
            for item in items {
                write_element(output, "item", item, depth + 1);
            }
            output.push_str(&format!("{}</{}>\n", indent, name));
        }
        Record::Mapping(fields) => {
            output.push_str(&format!("{}<{}>\n", indent, name));
            for (key, child) in fields {
                write_element(output, key, child, depth + 1);
            }
            output.push_str(&format!("{}</{}>\n", indent, name));
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
