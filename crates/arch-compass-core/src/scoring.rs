//! Per-criterion scoring of pattern characteristics.
//!
//! Qualitative levels map onto an ordinal scale:
//!
//! | Level | Ordinal |
//! |-------|---------|
//! | low / small / fast | 1 |
//! | medium | 2 |
//! | high / large / slow | 3 |
//!
//! For `cost` and `complexity` a lower level is better, so the ordinal is
//! inverted (`4 - ordinal`). Every other criterion uses the ordinal as-is.
//!
//! `timeToMarket` is *not* inverted: a slow pattern scores 3 on that
//! criterion even though slow delivery is usually undesirable. This matches
//! the established scoring table.

use crate::criteria::criterion;
use crate::error::{CompareError, Result};
use crate::models::{ArchitecturePattern, Characteristics, CriterionId, Level, TeamSize, TimeToMarket};

/// Position of a qualitative value on the 1..=3 scale.
pub trait Ordinal {
    fn ordinal(self) -> u8;
}

impl Ordinal for Level {
    fn ordinal(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

impl Ordinal for TeamSize {
    fn ordinal(self) -> u8 {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
        }
    }
}

impl Ordinal for TimeToMarket {
    fn ordinal(self) -> u8 {
        match self {
            Self::Fast => 1,
            Self::Medium => 2,
            Self::Slow => 3,
        }
    }
}

fn ordinal_of(characteristics: &Characteristics, id: CriterionId) -> u8 {
    match id {
        CriterionId::Scalability => characteristics.scalability.ordinal(),
        CriterionId::Maintainability => characteristics.maintainability.ordinal(),
        CriterionId::Performance => characteristics.performance.ordinal(),
        CriterionId::Cost => characteristics.cost.ordinal(),
        CriterionId::Complexity => characteristics.complexity.ordinal(),
        CriterionId::TimeToMarket => characteristics.time_to_market.ordinal(),
        CriterionId::TeamSize => characteristics.team_size.ordinal(),
        CriterionId::Security => characteristics.security.ordinal(),
    }
}

/// Score of `pattern` on one criterion, in `{1, 2, 3}` (higher is better).
pub fn score(pattern: &ArchitecturePattern, id: CriterionId) -> u8 {
    let ordinal = ordinal_of(&pattern.characteristics, id);
    if criterion(id).lower_is_better() {
        4 - ordinal
    } else {
        ordinal
    }
}

/// Like [`score`], with the criterion given by its string id.
///
/// An unknown id is a [`CompareError::DataIntegrity`] error.
pub fn score_by_id(pattern: &ArchitecturePattern, criterion_id: &str) -> Result<u8> {
    let id = criterion_id
        .parse::<CriterionId>()
        .map_err(|_| CompareError::data_integrity(&pattern.id, "criterion", Some(criterion_id)))?;
    Ok(score(pattern, id))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Category, Characteristics};

    pub(crate) fn pattern_with(id: &str, characteristics: Characteristics) -> ArchitecturePattern {
        ArchitecturePattern {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: Category::Layered,
            description: String::new(),
            pros: vec![],
            cons: vec![],
            use_cases: vec![],
            technology_stack: vec![],
            characteristics,
        }
    }

    pub(crate) fn uniform(level: Level, team: TeamSize, ttm: TimeToMarket) -> Characteristics {
        Characteristics {
            complexity: level,
            scalability: level,
            maintainability: level,
            performance: level,
            cost: level,
            team_size: team,
            time_to_market: ttm,
            security: level,
        }
    }

    #[test]
    fn high_levels_score_three_except_inverted() {
        let p = pattern_with("p", uniform(Level::High, TeamSize::Large, TimeToMarket::Slow));
        assert_eq!(score(&p, CriterionId::Scalability), 3);
        assert_eq!(score(&p, CriterionId::TeamSize), 3);
        assert_eq!(score(&p, CriterionId::Security), 3);
        assert_eq!(score(&p, CriterionId::Cost), 1);
        assert_eq!(score(&p, CriterionId::Complexity), 1);
    }

    #[test]
    fn slow_time_to_market_is_not_inverted() {
        let p = pattern_with("p", uniform(Level::Medium, TeamSize::Medium, TimeToMarket::Slow));
        assert_eq!(score(&p, CriterionId::TimeToMarket), 3);
    }

    #[test]
    fn low_cost_scores_best() {
        let p = pattern_with("p", uniform(Level::Low, TeamSize::Small, TimeToMarket::Fast));
        assert_eq!(score(&p, CriterionId::Cost), 3);
        assert_eq!(score(&p, CriterionId::Complexity), 3);
        assert_eq!(score(&p, CriterionId::Performance), 1);
    }

    #[test]
    fn scores_stay_in_range() {
        for level in Level::ALL {
            for team in TeamSize::ALL {
                for ttm in TimeToMarket::ALL {
                    let p = pattern_with("p", uniform(*level, *team, *ttm));
                    for id in CriterionId::ALL {
                        assert!((1..=3).contains(&score(&p, *id)));
                    }
                }
            }
        }
    }

    #[test]
    fn score_by_string_id() {
        let p = pattern_with("p", uniform(Level::Medium, TeamSize::Large, TimeToMarket::Fast));
        assert_eq!(score_by_id(&p, "teamSize").unwrap(), 3);
        assert!(matches!(
            score_by_id(&p, "elegance"),
            Err(CompareError::DataIntegrity { field, .. }) if field == "criterion"
        ));
    }
}
