//! Human-readable justification for a pattern under a project context.
//!
//! Rules run in a fixed order and each contributes at most one sentence:
//!
//! 1. Team size mismatch (small team vs. large-team pattern, or the reverse).
//! 2. Low budget vs. high-cost pattern.
//! 3. Short timeline vs. slow time to market.
//! 4. High expected scale vs. low scalability.
//! 5. Simple project vs. high-complexity pattern.
//! 6. Context-independent strengths: high scalability, high
//!    maintainability, low cost.
//!
//! If nothing fires, a single generic statement is returned, so the list
//! is never empty.

use crate::models::{ArchitecturePattern, Level, ProjectContext, TeamSize, TimeToMarket, Timeline};

pub const OVERKILL_FOR_SMALL_TEAM: &str =
    "May be overkill for a small team: coordination overhead will eat into delivery time";
pub const TOO_SMALL_FOR_LARGE_TEAM: &str =
    "May not scale with a large team: many developers will contend for the same codebase";
pub const BUDGET_RISK: &str = "High running cost may exceed a limited budget";
pub const TIMELINE_RISK: &str = "Slow time to market may not fit a short timeline";
pub const SCALE_RISK: &str = "Limited scalability may not meet the expected scale";
pub const OVER_ENGINEERING_RISK: &str =
    "High complexity risks over-engineering a simple project";
pub const SCALABILITY_STRENGTH: &str = "Excellent scalability for growing workloads";
pub const MAINTAINABILITY_STRENGTH: &str = "Highly maintainable over the long term";
pub const COST_STRENGTH: &str = "Cost-effective to build and operate";
pub const FALLBACK_REASON: &str = "Well-balanced architecture for your requirements";

/// Explain how `pattern` fits `context`.
pub fn explain(pattern: &ArchitecturePattern, context: &ProjectContext) -> Vec<String> {
    let ch = &pattern.characteristics;
    let mut reasons: Vec<&str> = Vec::new();

    match (context.team_size, ch.team_size) {
        (TeamSize::Small, TeamSize::Large) => reasons.push(OVERKILL_FOR_SMALL_TEAM),
        (TeamSize::Large, TeamSize::Small) => reasons.push(TOO_SMALL_FOR_LARGE_TEAM),
        _ => {}
    }

    if context.budget == Level::Low && ch.cost == Level::High {
        reasons.push(BUDGET_RISK);
    }

    if context.timeline == Timeline::Short && ch.time_to_market == TimeToMarket::Slow {
        reasons.push(TIMELINE_RISK);
    }

    if context.expected_scale == Level::High && ch.scalability == Level::Low {
        reasons.push(SCALE_RISK);
    }

    if context.complexity == Level::Low && ch.complexity == Level::High {
        reasons.push(OVER_ENGINEERING_RISK);
    }

    if ch.scalability == Level::High {
        reasons.push(SCALABILITY_STRENGTH);
    }
    if ch.maintainability == Level::High {
        reasons.push(MAINTAINABILITY_STRENGTH);
    }
    if ch.cost == Level::Low {
        reasons.push(COST_STRENGTH);
    }

    if reasons.is_empty() {
        reasons.push(FALLBACK_REASON);
    }

    reasons.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tests::{pattern_with, uniform};
    use pretty_assertions::assert_eq;

    fn context(team_size: TeamSize, budget: Level, timeline: Timeline, scale: Level, complexity: Level) -> ProjectContext {
        ProjectContext {
            team_size,
            budget,
            timeline,
            expected_scale: scale,
            complexity,
        }
    }

    #[test]
    fn all_medium_falls_back() {
        let p = pattern_with("p", uniform(Level::Medium, TeamSize::Medium, TimeToMarket::Medium));
        assert_eq!(explain(&p, &ProjectContext::default()), vec![FALLBACK_REASON.to_string()]);
    }

    #[test]
    fn heavy_pattern_for_small_simple_project() {
        let p = pattern_with("p", uniform(Level::High, TeamSize::Large, TimeToMarket::Slow));
        let ctx = context(TeamSize::Small, Level::Low, Timeline::Short, Level::Low, Level::Low);
        assert_eq!(
            explain(&p, &ctx),
            vec![
                OVERKILL_FOR_SMALL_TEAM,
                BUDGET_RISK,
                TIMELINE_RISK,
                OVER_ENGINEERING_RISK,
                SCALABILITY_STRENGTH,
                MAINTAINABILITY_STRENGTH,
            ]
        );
    }

    #[test]
    fn light_pattern_for_large_ambitious_project() {
        let p = pattern_with("p", uniform(Level::Low, TeamSize::Small, TimeToMarket::Fast));
        let ctx = context(TeamSize::Large, Level::High, Timeline::Long, Level::High, Level::High);
        assert_eq!(
            explain(&p, &ctx),
            vec![TOO_SMALL_FOR_LARGE_TEAM, SCALE_RISK, COST_STRENGTH]
        );
    }

    #[test]
    fn never_empty() {
        for level in Level::ALL {
            for team in TeamSize::ALL {
                let p = pattern_with("p", uniform(*level, *team, TimeToMarket::Medium));
                for ctx_team in TeamSize::ALL {
                    let ctx = context(*ctx_team, *level, Timeline::Medium, *level, *level);
                    assert!(!explain(&p, &ctx).is_empty());
                }
            }
        }
    }
}
