//! SQLite-backed [`PatternStore`] implementation.
//!
//! Each record is one row of the `patterns` table. List fields and the
//! characteristics map are JSON text columns; filters on characteristics
//! use `json_extract`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::collections::BTreeMap;

use arch_compass_core::models::{CriterionId, PatternFilter, PatternRecord};
use arch_compass_core::store::PatternStore;

const SELECT_COLUMNS: &str = "SELECT id, name, category, description, pros_json, cons_json, \
     use_cases_json, technology_stack_json, characteristics_json FROM patterns";

/// SQLite implementation of the [`PatternStore`] trait.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn decode_list(row: &SqliteRow, column: &str, id: &str) -> Result<Vec<String>> {
    let raw: String = row.try_get(column)?;
    serde_json::from_str(&raw).with_context(|| format!("pattern '{}': invalid {}", id, column))
}

fn row_to_record(row: &SqliteRow) -> Result<PatternRecord> {
    let id: String = row.try_get("id")?;
    let characteristics_raw: String = row.try_get("characteristics_json")?;
    let characteristics: BTreeMap<String, String> = serde_json::from_str(&characteristics_raw)
        .with_context(|| format!("pattern '{}': invalid characteristics_json", id))?;

    Ok(PatternRecord {
        name: row.try_get("name")?,
        category: row.try_get("category")?,
        description: row.try_get("description")?,
        pros: decode_list(row, "pros_json", &id)?,
        cons: decode_list(row, "cons_json", &id)?,
        use_cases: decode_list(row, "use_cases_json", &id)?,
        technology_stack: decode_list(row, "technology_stack_json", &id)?,
        characteristics,
        id,
    })
}

#[async_trait]
impl PatternStore for SqliteStore {
    async fn upsert_pattern(&self, record: &PatternRecord) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        sqlx::query(
            r#"
            INSERT INTO patterns (id, name, category, description, pros_json, cons_json,
                                  use_cases_json, technology_stack_json, characteristics_json,
                                  created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                category = excluded.category,
                description = excluded.description,
                pros_json = excluded.pros_json,
                cons_json = excluded.cons_json,
                use_cases_json = excluded.use_cases_json,
                technology_stack_json = excluded.technology_stack_json,
                characteristics_json = excluded.characteristics_json,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(&record.category)
        .bind(&record.description)
        .bind(serde_json::to_string(&record.pros)?)
        .bind(serde_json::to_string(&record.cons)?)
        .bind(serde_json::to_string(&record.use_cases)?)
        .bind(serde_json::to_string(&record.technology_stack)?)
        .bind(serde_json::to_string(&record.characteristics)?)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_pattern(&self, id: &str) -> Result<Option<PatternRecord>> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn find_patterns_by_id(&self, ids: &[String]) -> Result<Vec<PatternRecord>> {
        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(record) = self.get_pattern(id).await? {
                records.push(record);
            }
        }
        Ok(records)
    }

    async fn find_all_patterns(&self, filter: &PatternFilter) -> Result<Vec<PatternRecord>> {
        let mut sql = format!("{} WHERE 1 = 1", SELECT_COLUMNS);
        let mut binds: Vec<&'static str> = Vec::new();

        if let Some(category) = filter.category {
            sql.push_str(" AND lower(category) = ?");
            binds.push(category.as_str());
        }
        if let Some(level) = filter.complexity {
            sql.push_str(&format!(
                " AND lower(json_extract(characteristics_json, '$.{}')) = ?",
                CriterionId::Complexity.as_str()
            ));
            binds.push(level.as_str());
        }
        if let Some(level) = filter.scalability {
            sql.push_str(&format!(
                " AND lower(json_extract(characteristics_json, '$.{}')) = ?",
                CriterionId::Scalability.as_str()
            ));
            binds.push(level.as_str());
        }
        sql.push_str(" ORDER BY id");

        let mut query = sqlx::query(&sql);
        for value in binds {
            query = query.bind(value);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(row_to_record).collect()
    }

    async fn count_patterns(&self) -> Result<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM patterns")
            .fetch_one(&self.pool)
            .await?;
        Ok(usize::try_from(count)?)
    }
}
