//! Field path parsing
//!
//! A field path is a dotted string addressing a location inside a record,
//! e.g. `address.city` or `users[].name`. The `[]` suffix marks a segment
//! whose value is a sequence to be traversed element by element.
//!
//! Copyright (c) 2026 Recast Team
//! Licensed under the Apache-2.0 license

use std::fmt;

/// One step of a field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Field name with any `[]` marker stripped
    pub name: String,
    /// Whether the segment carried the `[]` "for each element" marker
    pub each: bool,
}

/// A parsed dotted field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Parse a dotted path string. Parsing is total: any string yields a
    /// path, and a path addressing nothing simply resolves to absent at
    /// read time.
    pub fn parse(path: &str) -> Self {
        let segments = path
            .split('.')
            .map(|part| match part.strip_suffix("[]") {
                Some(name) => Segment {
                    name: name.to_string(),
                    each: true,
                },
                None => Segment {
                    name: part.to_string(),
                    each: false,
                },
            })
            .collect();
        FieldPath { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment.name)?;
            if segment.each {
                write!(f, "[]")?;
            }
        }
        Ok(())
    }
}
