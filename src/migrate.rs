//! Schema migrations (idempotent).

use anyhow::Result;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::db;

/// Connect to the configured database and apply the schema.
pub async fn run_migrations(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;
    apply(&pool).await?;
    pool.close().await;
    Ok(())
}

/// Apply the schema to an open pool.
///
/// List-valued fields and the characteristics map are stored as JSON text,
/// mirroring the loosely-typed `PatternRecord` shape.
pub async fn apply(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS patterns (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            pros_json TEXT NOT NULL DEFAULT '[]',
            cons_json TEXT NOT NULL DEFAULT '[]',
            use_cases_json TEXT NOT NULL DEFAULT '[]',
            technology_stack_json TEXT NOT NULL DEFAULT '[]',
            characteristics_json TEXT NOT NULL DEFAULT '{}',
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_patterns_category ON patterns(category)")
        .execute(pool)
        .await?;

    Ok(())
}
