//! In-memory [`PatternStore`] implementation for tests and embedding.
//!
//! Records live in a `BTreeMap` keyed by id behind `std::sync::RwLock`,
//! which gives id-ordered listing for free.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::catalog::builtin_catalog;
use crate::models::{PatternFilter, PatternRecord};

use super::PatternStore;

/// In-memory pattern catalog.
pub struct InMemoryStore {
    patterns: RwLock<BTreeMap<String, PatternRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            patterns: RwLock::new(BTreeMap::new()),
        }
    }

    /// A store pre-populated with `records`. Later duplicates win.
    pub fn with_records(records: impl IntoIterator<Item = PatternRecord>) -> Self {
        let patterns = records.into_iter().map(|r| (r.id.clone(), r)).collect();
        Self {
            patterns: RwLock::new(patterns),
        }
    }

    /// A store holding the built-in catalog.
    pub fn builtin() -> Self {
        Self::with_records(builtin_catalog().iter().map(PatternRecord::from))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, PatternRecord>>> {
        self.patterns
            .read()
            .map_err(|_| anyhow!("pattern store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, PatternRecord>>> {
        self.patterns
            .write()
            .map_err(|_| anyhow!("pattern store lock poisoned"))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PatternStore for InMemoryStore {
    async fn upsert_pattern(&self, record: &PatternRecord) -> Result<()> {
        self.write()?.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn get_pattern(&self, id: &str) -> Result<Option<PatternRecord>> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn find_patterns_by_id(&self, ids: &[String]) -> Result<Vec<PatternRecord>> {
        let patterns = self.read()?;
        Ok(ids.iter().filter_map(|id| patterns.get(id).cloned()).collect())
    }

    async fn find_all_patterns(&self, filter: &PatternFilter) -> Result<Vec<PatternRecord>> {
        Ok(self
            .read()?
            .values()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    async fn count_patterns(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}
