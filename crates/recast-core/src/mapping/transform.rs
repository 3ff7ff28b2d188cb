//! Transform rule evaluation
//!
//! Mapping rules may name one of a small fixed vocabulary of string
//! transforms to apply to the resolved source value before it is written to
//! the target. Rule names are case-insensitive and unknown names fall back
//! to identity: leniency here is deliberate, not an error.
//!
//! Copyright (c) 2026 Recast Team
//! Licensed under the Apache-2.0 license

use crate::record::Record;

/// A named text transform from the fixed vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformRule {
    Uppercase,
    Lowercase,
    Trim,
    /// Fallback for unrecognized rule names; returns values unchanged
    Identity,
}

impl TransformRule {
    /// Resolve a rule name, case-insensitively. Unknown names map to
    /// `Identity`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "uppercase" => TransformRule::Uppercase,
            "lowercase" => TransformRule::Lowercase,
            "trim" => TransformRule::Trim,
            other => {
                log::debug!("unknown transformation rule '{}', applying identity", other);
                TransformRule::Identity
            }
        }
    }

    /// Apply the transform to a record.
    ///
    /// Scalars are text-transformed. Sequences are transformed element-wise,
    /// recursively, preserving structure. Mappings are returned unchanged:
    /// transforms only touch scalar leaves.
    pub fn apply(&self, value: Record) -> Record {
        match value {
            Record::Scalar(text) => Record::Scalar(self.apply_text(&text)),
            Record::Sequence(items) => {
                Record::Sequence(items.into_iter().map(|item| self.apply(item)).collect())
            }
            mapping @ Record::Mapping(_) => mapping,
        }
    }

    fn apply_text(&self, text: &str) -> String {
        match self {
            TransformRule::Uppercase => text.to_uppercase(),
            TransformRule::Lowercase => text.to_lowercase(),
            TransformRule::Trim => text.trim().to_string(),
            TransformRule::Identity => text.to_string(),
        }
    }
}
