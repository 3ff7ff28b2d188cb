//! Mapping configurations and their store
//!
//! A mapping configuration is a named, persistable bundle of field mapping
//! rules together with its source and target formats. The engine only ever
//! consumes the ordered rule list; everything else is bookkeeping for the
//! callers that manage configurations.
//!
//! The store is an injected capability rather than process-wide state, so
//! hosts can back it with whatever persistence they have. The in-memory
//! implementation here is the default and is what the tests use.
//!
//! Copyright (c) 2026 Recast Team
//! Licensed under the Apache-2.0 license

use crate::format::DataFormat;
use crate::mapping::FieldMapping;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

/// A named bundle of field mapping rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingConfiguration {
    /// Identity assigned by the store on first save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source_format: DataFormat,
    pub target_format: DataFormat,
    #[serde(default)]
    pub field_mappings: Vec<FieldMapping>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl MappingConfiguration {
    pub fn new(
        name: impl Into<String>,
        source_format: DataFormat,
        target_format: DataFormat,
        field_mappings: Vec<FieldMapping>,
    ) -> Self {
        let now = Utc::now();
        MappingConfiguration {
            id: None,
            name: name.into(),
            description: None,
            source_format,
            target_format,
            field_mappings,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Read/write capability over stored mapping configurations.
///
/// The mapping engine only uses `find_by_id`, read-only; the CRUD surface
/// exists for the hosts that manage configurations.
pub trait MappingConfigurationStore: Send + Sync {
    fn find_by_id(&self, id: u64) -> Option<MappingConfiguration>;
    fn find_all(&self) -> Vec<MappingConfiguration>;
    /// Save a configuration, assigning an id on first save. Returns the
    /// stored configuration with its id populated.
    fn save(&self, configuration: MappingConfiguration) -> MappingConfiguration;
    /// Delete by id, returning whether anything was removed.
    fn delete_by_id(&self, id: u64) -> bool;
}

/// In-memory, identity-keyed configuration store
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    configurations: BTreeMap<u64, MappingConfiguration>,
    next_id: u64,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MappingConfigurationStore for InMemoryConfigStore {
    fn find_by_id(&self, id: u64) -> Option<MappingConfiguration> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.configurations.get(&id).cloned()
    }

    fn find_all(&self) -> Vec<MappingConfiguration> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.configurations.values().cloned().collect()
    }

    fn save(&self, mut configuration: MappingConfiguration) -> MappingConfiguration {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let id = match configuration.id {
            Some(existing) => existing,
            None => {
                inner.next_id += 1;
                inner.next_id
            }
        };
        configuration.id = Some(id);
        configuration.updated_at = Utc::now();
        inner.configurations.insert(id, configuration.clone());
        configuration
    }

    fn delete_by_id(&self, id: u64) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.configurations.remove(&id).is_some()
    }
}
