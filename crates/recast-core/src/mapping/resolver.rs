//! Path resolution over records
//!
//! This module implements the two traversal operations behind the mapping
//! engine: reading a value out of a record at a dotted path, and writing a
//! value into a record at a dotted path, creating intermediate mappings as
//! needed.
//!
//! Reads are best-effort and never fail structurally: an unresolvable path
//! is simply absent. Writes are total: any path is creatable, replacing
//! non-mapping values that stand in the way.
//!
//! Copyright (c) 2026 Recast Team
//! Licensed under the Apache-2.0 license

use super::path::{FieldPath, Segment};
use crate::record::Record;
use std::collections::BTreeMap;

/// Read the value addressed by `path` out of `record`.
///
/// Returns an owned clone of the addressed subtree, or `None` when the path
/// resolves to nothing. A collection context is handled two ways:
///
/// - An explicit `[]` marker traverses the named sequence element by
///   element, applying the remaining path to each and collecting the
///   per-element results; elements where the path fails are discarded.
/// - A plain segment against a sequence broadcasts: the field is collected
///   from every mapping element that has it. This covers paths that enter a
///   collection through an upstream `[]` marker without repeating the
///   marker for every subsequent shared field.
///
/// In both cases an empty collection is absent, not an empty sequence:
/// empty means there is no source value to map.
pub fn resolve_read(record: &Record, path: &FieldPath) -> Option<Record> {
    read(record, path.segments())
}

fn read(current: &Record, segments: &[Segment]) -> Option<Record> {
    let (segment, rest) = match segments.split_first() {
        Some(split) => split,
        None => return Some(current.clone()),
    };

    if segment.each {
        let fields = current.as_mapping()?;
        let value = fields.get(&segment.name)?;
        match value {
            Record::Sequence(items) => {
                if rest.is_empty() {
                    return Some(value.clone());
                }
                let collected: Vec<Record> =
                    items.iter().filter_map(|item| read(item, rest)).collect();
                if collected.is_empty() {
                    None
                } else {
                    Some(Record::Sequence(collected))
                }
            }
            // Marker on a non-sequence field: continue as if it were plain.
            other => read(other, rest),
        }
    } else {
        match current {
            Record::Mapping(fields) => read(fields.get(&segment.name)?, rest),
            Record::Sequence(items) => {
                let collected: Vec<Record> = items
                    .iter()
                    .filter_map(|item| item.as_mapping()?.get(&segment.name).cloned())
                    .collect();
                if collected.is_empty() {
                    None
                } else {
                    read(&Record::Sequence(collected), rest)
                }
            }
            Record::Scalar(_) => None,
        }
    }
}

/// Write `value` into `target` so that it is reachable at `path`.
///
/// All but the last segment are directories: a missing key, or a key
/// holding anything other than a mapping, is replaced with an empty
/// mapping. The leaf overwrites whatever was previously at that key.
///
/// A sequence of exactly one element is unwrapped and its element stored
/// directly. This mirrors the common case of a broadcast read over a
/// one-element source collection, which should not force the target field
/// to become an array. It also means a genuine one-element array collapses
/// to its element on write; that is deliberate, if surprising.
pub fn resolve_write(target: &mut BTreeMap<String, Record>, path: &FieldPath, value: Record) {
    let segments = path.segments();
    let (leaf, directories) = match segments.split_last() {
        Some(split) => split,
        None => return,
    };

    let mut current = target;
    for directory in directories {
        let slot = current
            .entry(directory.name.clone())
            .or_insert_with(Record::empty_mapping);
        if !slot.is_mapping() {
            *slot = Record::empty_mapping();
        }
        current = match slot {
            Record::Mapping(fields) => fields,
            _ => unreachable!("directory slot was just normalized to a mapping"),
        };
    }

    current.insert(leaf.name.clone(), unwrap_single(value));
}

fn unwrap_single(value: Record) -> Record {
    match value {
        Record::Sequence(mut items) if items.len() == 1 => items.remove(0),
        other => other,
    }
}
