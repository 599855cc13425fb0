//! Pattern catalog abstraction.
//!
//! The [`PatternStore`] trait is the only boundary the comparison engine
//! reads through, enabling pluggable backends (SQLite in the application,
//! in-memory for tests and embedding).
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{PatternFilter, PatternRecord};

/// Abstract catalog backend.
///
/// Records are returned unvalidated; the engine converts them into
/// [`ArchitecturePattern`](crate::models::ArchitecturePattern)s and reports
/// bad data itself.
///
/// # Operations
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`upsert_pattern`](PatternStore::upsert_pattern) | Insert or replace a record |
/// | [`get_pattern`](PatternStore::get_pattern) | Fetch one record by id |
/// | [`find_patterns_by_id`](PatternStore::find_patterns_by_id) | Fetch the existing records among a set of ids |
/// | [`find_all_patterns`](PatternStore::find_all_patterns) | List records matching a filter |
/// | [`count_patterns`](PatternStore::count_patterns) | Number of stored records |
#[async_trait]
pub trait PatternStore: Send + Sync {
    /// Insert a record, replacing any record with the same id.
    async fn upsert_pattern(&self, record: &PatternRecord) -> Result<()>;

    /// Retrieve one record by id.
    async fn get_pattern(&self, id: &str) -> Result<Option<PatternRecord>>;

    /// Retrieve the records for `ids` that exist, in the order requested.
    ///
    /// Unknown ids are skipped; callers detect them by comparing counts.
    async fn find_patterns_by_id(&self, ids: &[String]) -> Result<Vec<PatternRecord>>;

    /// Retrieve all records matching `filter`, ordered by id.
    async fn find_all_patterns(&self, filter: &PatternFilter) -> Result<Vec<PatternRecord>>;

    /// Total number of records.
    async fn count_patterns(&self) -> Result<usize>;
}
