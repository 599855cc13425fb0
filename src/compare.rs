//! Pattern comparison against the SQLite catalog.
//!
//! This module provides the application-level entry point for comparison.
//! The algorithm (scoring, weighting, ranking, reasoning) lives in
//! `arch-compass-core` and reads through the `PatternStore` trait; this
//! wrapper handles the database connection and CLI output formatting.

use anyhow::Result;
use tracing::info;

use arch_compass_core::models::{ComparisonResult, ProjectContext, ScoredPattern};

use crate::config::Config;
use crate::db;
use crate::sqlite_store::SqliteStore;

/// Compare the named catalog patterns under `context`.
pub async fn compare_patterns(
    config: &Config,
    pattern_ids: &[String],
    context: ProjectContext,
) -> Result<ComparisonResult> {
    let pool = db::connect(config).await?;
    let store = SqliteStore::new(pool.clone());
    let result = arch_compass_core::compare(&store, pattern_ids, context).await;
    pool.close().await;

    let result = result?;
    info!(
        patterns = result.patterns.len(),
        best = %result.recommendation.best.pattern.id,
        "comparison finished"
    );
    Ok(result)
}

fn format_scores(scored: &ScoredPattern) -> String {
    scored
        .scores
        .iter()
        .map(|(id, s)| format!("{}={}", id, s))
        .collect::<Vec<_>>()
        .join("  ")
}

/// CLI entry point for `compass compare`.
pub async fn run_compare(
    config: &Config,
    pattern_ids: &[String],
    context: ProjectContext,
    json: bool,
) -> Result<()> {
    let result = compare_patterns(config, pattern_ids, context).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let ctx = &result.project_context;
    println!(
        "Context: team={}, budget={}, timeline={}, scale={}, complexity={}",
        ctx.team_size, ctx.budget, ctx.timeline, ctx.expected_scale, ctx.complexity
    );
    println!();

    for (i, scored) in result.patterns.iter().enumerate() {
        println!(
            "{}. [{:.2}] {} ({})",
            i + 1,
            scored.weighted_score,
            scored.pattern.name,
            scored.pattern.id
        );
        println!("    scores: {}", format_scores(scored));
    }
    println!();

    let rec = &result.recommendation;
    println!("Recommended: {} ({})", rec.best.pattern.name, rec.best.pattern.id);
    for reason in &rec.reasoning {
        println!("  - {}", reason);
    }

    if !rec.alternatives.is_empty() {
        println!();
        println!("Alternatives:");
        for alt in &rec.alternatives {
            println!(
                "  {} ({}) [{:.2}]",
                alt.pattern.pattern.name, alt.pattern.pattern.id, alt.pattern.weighted_score
            );
            for reason in &alt.reasoning {
                println!("    - {}", reason);
            }
        }
    }

    Ok(())
}
