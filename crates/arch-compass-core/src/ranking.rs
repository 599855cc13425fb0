//! Weighted aggregation and ranking of patterns.
//!
//! # Algorithm
//!
//! 1. Score every pattern on each fixed criterion ([`crate::scoring::score`]).
//! 2. `weighted = Σ score × weight`, summed in basis points so the result
//!    is exact and lies in `[1.0, 3.0]`.
//! 3. Sort by weighted score (desc). The sort is stable, so patterns with
//!    equal scores keep their input order.

use std::collections::BTreeMap;

use crate::criteria::list_criteria;
use crate::error::{CompareError, Result};
use crate::models::{ArchitecturePattern, CriterionId, ScoredPattern};
use crate::scoring::score;

/// Per-criterion scores and the weighted total for one pattern.
pub fn weighted_score(pattern: &ArchitecturePattern) -> (f64, BTreeMap<CriterionId, u8>) {
    let mut scores = BTreeMap::new();
    let mut total_bp: u32 = 0;

    for c in list_criteria() {
        let s = score(pattern, c.id);
        total_bp += u32::from(s) * c.weight_bp();
        scores.insert(c.id, s);
    }

    (f64::from(total_bp) / 10_000.0, scores)
}

/// Decorate a pattern with its scores.
pub fn score_pattern(pattern: ArchitecturePattern) -> ScoredPattern {
    let (weighted, scores) = weighted_score(&pattern);
    ScoredPattern {
        pattern,
        weighted_score: weighted,
        scores,
    }
}

/// Score and order patterns, best first.
///
/// Fails with [`CompareError::InsufficientInput`] for fewer than two patterns.
pub fn rank(patterns: Vec<ArchitecturePattern>) -> Result<Vec<ScoredPattern>> {
    if patterns.len() < 2 {
        return Err(CompareError::InsufficientInput {
            got: patterns.len(),
        });
    }

    let mut scored: Vec<ScoredPattern> = patterns.into_iter().map(score_pattern).collect();
    scored.sort_by(|a, b| {
        b.weighted_score
            .partial_cmp(&a.weighted_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Level, TeamSize, TimeToMarket};
    use crate::scoring::tests::{pattern_with, uniform};
    use pretty_assertions::assert_eq;

    #[test]
    fn extremes_hit_bounds_exactly() {
        // All criteria at 1: low everywhere except inverted ones.
        let mut worst = uniform(Level::Low, TeamSize::Small, TimeToMarket::Fast);
        worst.cost = Level::High;
        worst.complexity = Level::High;
        let (w, _) = weighted_score(&pattern_with("worst", worst));
        assert_eq!(w, 1.0);

        let mut best = uniform(Level::High, TeamSize::Large, TimeToMarket::Slow);
        best.cost = Level::Low;
        best.complexity = Level::Low;
        let (b, _) = weighted_score(&pattern_with("best", best));
        assert_eq!(b, 3.0);
    }

    #[test]
    fn weighted_score_in_range_for_all_combinations() {
        for l in Level::ALL {
            for cost in Level::ALL {
                for team in TeamSize::ALL {
                    for ttm in TimeToMarket::ALL {
                        let mut ch = uniform(*l, *team, *ttm);
                        ch.cost = *cost;
                        let (w, scores) = weighted_score(&pattern_with("p", ch));
                        assert!((1.0..=3.0).contains(&w), "out of range: {}", w);
                        assert_eq!(scores.len(), 8);
                    }
                }
            }
        }
    }

    #[test]
    fn lowering_cost_or_complexity_raises_score() {
        let base = uniform(Level::Medium, TeamSize::Medium, TimeToMarket::Medium);
        let (mid, _) = weighted_score(&pattern_with("p", base));

        let mut cheaper = base;
        cheaper.cost = Level::Low;
        let (c, _) = weighted_score(&pattern_with("p", cheaper));
        assert!(c > mid);

        let mut pricier = base;
        pricier.cost = Level::High;
        let (p, _) = weighted_score(&pattern_with("p", pricier));
        assert!(p < mid);

        let mut simpler = base;
        simpler.complexity = Level::Low;
        let (s, _) = weighted_score(&pattern_with("p", simpler));
        assert!(s > mid);
    }

    #[test]
    fn rank_orders_descending() {
        let low = pattern_with("low", uniform(Level::Low, TeamSize::Small, TimeToMarket::Fast));
        let high = pattern_with("high", uniform(Level::High, TeamSize::Large, TimeToMarket::Slow));
        let ranked = rank(vec![low, high]).unwrap();
        let ids: Vec<&str> = ranked.iter().map(|s| s.pattern.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "low"]);
        assert!(ranked[0].weighted_score >= ranked[1].weighted_score);
    }

    #[test]
    fn ties_keep_input_order() {
        let ch = uniform(Level::Medium, TeamSize::Medium, TimeToMarket::Medium);
        let ranked = rank(vec![
            pattern_with("first", ch),
            pattern_with("second", ch),
            pattern_with("third", ch),
        ])
        .unwrap();
        let ids: Vec<&str> = ranked.iter().map(|s| s.pattern.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn rank_rejects_single_pattern() {
        let p = pattern_with("solo", uniform(Level::Low, TeamSize::Small, TimeToMarket::Fast));
        assert!(matches!(
            rank(vec![p]),
            Err(CompareError::InsufficientInput { got: 1 })
        ));
        assert!(matches!(
            rank(vec![]),
            Err(CompareError::InsufficientInput { got: 0 })
        ));
    }
}
