//! Comparison orchestrator and catalog read API.
//!
//! These functions operate entirely through the [`PatternStore`] trait. The
//! calling application picks the store implementation; everything after
//! retrieval is pure and synchronous.
//!
//! # Pipeline
//!
//! 1. Collapse duplicate ids (first occurrence wins) and require at least two.
//! 2. Fetch records; any id the store does not return is reported as missing.
//! 3. Validate records into [`ArchitecturePattern`]s.
//! 4. Rank ([`crate::ranking::rank`]).
//! 5. Explain the winner and the next two ranked patterns against the context.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{CompareError, Result};
use crate::models::{
    Alternative, ArchitecturePattern, ComparisonResult, PatternFilter, PatternRecord,
    ProjectContext, Recommendation,
};
use crate::ranking::rank;
use crate::reasoning::explain;
use crate::store::PatternStore;

/// Maximum number of runners-up in a recommendation.
pub const MAX_ALTERNATIVES: usize = 2;

/// List validated patterns matching `filter`, ordered by id.
pub async fn list_patterns<S: PatternStore + ?Sized>(
    store: &S,
    filter: &PatternFilter,
) -> Result<Vec<ArchitecturePattern>> {
    store
        .find_all_patterns(filter)
        .await?
        .into_iter()
        .map(ArchitecturePattern::try_from)
        .collect()
}

/// Retrieve one validated pattern.
pub async fn get_pattern<S: PatternStore + ?Sized>(store: &S, id: &str) -> Result<ArchitecturePattern> {
    match store.get_pattern(id).await? {
        Some(record) => ArchitecturePattern::try_from(record),
        None => Err(CompareError::NotFound {
            ids: vec![id.to_string()],
        }),
    }
}

/// Compare the catalog patterns named by `pattern_ids` under `context`.
pub async fn compare<S: PatternStore + ?Sized>(
    store: &S,
    pattern_ids: &[String],
    context: ProjectContext,
) -> Result<ComparisonResult> {
    let ids = distinct_ids(pattern_ids)?;

    let records = store.find_patterns_by_id(&ids).await?;
    let patterns = in_request_order(&ids, records)?
        .into_iter()
        .map(ArchitecturePattern::try_from)
        .collect::<Result<Vec<_>>>()?;

    debug!(count = patterns.len(), "comparing patterns");
    compare_patterns(patterns, context)
}

/// Rank already-retrieved patterns and build the recommendation.
pub fn compare_patterns(
    patterns: Vec<ArchitecturePattern>,
    context: ProjectContext,
) -> Result<ComparisonResult> {
    let ranked = rank(patterns)?;

    // rank() guarantees at least two entries.
    let best = ranked[0].clone();
    let reasoning = explain(&best.pattern, &context);
    let alternatives = ranked
        .iter()
        .skip(1)
        .take(MAX_ALTERNATIVES)
        .map(|alt| Alternative {
            reasoning: explain(&alt.pattern, &context),
            pattern: alt.clone(),
        })
        .collect();

    debug!(
        best = %best.pattern.id,
        score = best.weighted_score,
        "comparison complete"
    );

    Ok(ComparisonResult {
        patterns: ranked,
        recommendation: Recommendation {
            best,
            reasoning,
            alternatives,
        },
        project_context: context,
    })
}

fn distinct_ids(pattern_ids: &[String]) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut ids = Vec::with_capacity(pattern_ids.len());

    for raw in pattern_ids {
        let id = raw.trim();
        if id.is_empty() {
            return Err(CompareError::Validation(
                "pattern ids must not be empty".to_string(),
            ));
        }
        if seen.insert(id) {
            ids.push(id.to_string());
        }
    }

    if ids.len() < 2 {
        return Err(CompareError::Validation(format!(
            "at least 2 distinct pattern ids are required, got {}",
            ids.len()
        )));
    }

    Ok(ids)
}

/// Order records by the requested ids, failing with every id that is absent.
fn in_request_order(ids: &[String], records: Vec<PatternRecord>) -> Result<Vec<PatternRecord>> {
    let mut by_id: HashMap<String, PatternRecord> =
        records.into_iter().map(|r| (r.id.clone(), r)).collect();

    let missing: Vec<String> = ids
        .iter()
        .filter(|id| !by_id.contains_key(id.as_str()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(CompareError::NotFound { ids: missing });
    }

    Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
}
