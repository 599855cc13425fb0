//! Catalog import and seeding.
//!
//! Catalog files hold a `patterns` array of records in TOML or JSON,
//! chosen by file extension (`.json` → JSON, anything else → TOML):
//!
//! ```toml
//! [[patterns]]
//! id = "cqrs"
//! name = "CQRS"
//! category = "event-driven"
//! description = "Separate read and write models"
//! pros = ["Independent read scaling"]
//! useCases = ["Reporting-heavy domains"]
//!
//! [patterns.characteristics]
//! complexity = "high"
//! scalability = "high"
//! maintainability = "medium"
//! performance = "high"
//! cost = "medium"
//! teamSize = "medium"
//! timeToMarket = "slow"
//! security = "medium"
//! ```
//!
//! Every record is validated before anything is written, so a bad file
//! leaves the catalog untouched.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use arch_compass_core::catalog::builtin_catalog;
use arch_compass_core::models::{ArchitecturePattern, PatternRecord};
use arch_compass_core::store::PatternStore;

use crate::config::Config;
use crate::db;
use crate::sqlite_store::SqliteStore;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    patterns: Vec<PatternRecord>,
}

/// Read pattern records from a TOML or JSON catalog file.
pub fn parse_catalog(path: &Path) -> Result<Vec<PatternRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let file: CatalogFile = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON catalog: {}", path.display()))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML catalog: {}", path.display()))?
    };

    Ok(file.patterns)
}

/// Validate records and return their normalized form.
///
/// Fails on the first invalid record or on a repeated id.
pub fn validate_records(records: Vec<PatternRecord>) -> Result<Vec<ArchitecturePattern>> {
    let mut seen = HashSet::new();
    let mut patterns = Vec::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.id.clone()) {
            bail!("duplicate pattern id in catalog: {}", record.id);
        }
        patterns.push(ArchitecturePattern::try_from(record)?);
    }

    Ok(patterns)
}

/// Upsert validated patterns into a store. Returns the number written.
pub async fn store_patterns<S: PatternStore + ?Sized>(
    store: &S,
    patterns: &[ArchitecturePattern],
) -> Result<usize> {
    for pattern in patterns {
        store.upsert_pattern(&PatternRecord::from(pattern)).await?;
    }
    Ok(patterns.len())
}

/// Upsert the built-in catalog into a store.
pub async fn seed_builtin<S: PatternStore + ?Sized>(store: &S) -> Result<usize> {
    let written = store_patterns(store, &builtin_catalog()).await?;
    info!(patterns = written, "seeded built-in catalog");
    Ok(written)
}

/// CLI entry point for `compass import <file>`.
pub async fn run_import(config: &Config, path: &Path) -> Result<()> {
    let patterns = validate_records(parse_catalog(path)?)?;

    let pool = db::connect(config).await?;
    let store = SqliteStore::new(pool.clone());
    let written = store_patterns(&store, &patterns).await?;
    pool.close().await;

    info!(patterns = written, file = %path.display(), "imported catalog");
    println!("imported patterns: {}", written);
    Ok(())
}

/// CLI entry point for `compass seed`.
pub async fn run_seed(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;
    let store = SqliteStore::new(pool.clone());
    let written = seed_builtin(&store).await?;
    pool.close().await;

    println!("seeded patterns: {}", written);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch_compass_core::models::Category;
    use arch_compass_core::store::memory::InMemoryStore;
    use std::fs;
    use tempfile::TempDir;

    const CQRS_TOML: &str = r#"
[[patterns]]
id = "cqrs"
name = "CQRS"
category = "event-driven"
description = "Separate read and write models"
pros = ["Independent read scaling"]
useCases = ["Reporting-heavy domains"]

[patterns.characteristics]
complexity = "high"
scalability = "high"
maintainability = "medium"
performance = "high"
cost = "medium"
teamSize = "medium"
timeToMarket = "slow"
security = "medium"
"#;

    #[test]
    fn parses_toml_catalog() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("extra.toml");
        fs::write(&path, CQRS_TOML).unwrap();

        let records = parse_catalog(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].use_cases, vec!["Reporting-heavy domains"]);

        let patterns = validate_records(records).unwrap();
        assert_eq!(patterns[0].category, Category::EventDriven);
    }

    #[test]
    fn parses_json_catalog() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("extra.json");
        let records: Vec<PatternRecord> =
            builtin_catalog().iter().map(PatternRecord::from).collect();
        fs::write(
            &path,
            serde_json::to_string(&serde_json::json!({ "patterns": records })).unwrap(),
        )
        .unwrap();

        let parsed = parse_catalog(&path).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn rejects_duplicates_and_bad_values() {
        let rec = PatternRecord::from(&builtin_catalog()[0]);
        let err = validate_records(vec![rec.clone(), rec.clone()]).unwrap_err();
        assert!(err.to_string().contains("duplicate pattern id"));

        let mut bad = rec;
        bad.characteristics
            .insert("cost".to_string(), "priceless".to_string());
        let err = validate_records(vec![bad]).unwrap_err();
        assert!(err.to_string().contains("priceless"));
    }

    #[tokio::test]
    async fn seeding_fills_an_empty_store() {
        let store = InMemoryStore::new();
        let written = seed_builtin(&store).await.unwrap();
        assert_eq!(written, builtin_catalog().len());
        assert_eq!(store.count_patterns().await.unwrap(), written);
    }
}
