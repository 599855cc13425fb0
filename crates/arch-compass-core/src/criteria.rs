//! The fixed comparison criteria and their weights.

use serde::Serialize;
use std::fmt;

use crate::models::CriterionId;

/// Grouping of a criterion for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionCategory {
    Technical,
    Business,
    Operational,
}

impl CriterionCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Business => "business",
            Self::Operational => "operational",
        }
    }
}

impl fmt::Display for CriterionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A weighted dimension used for scoring and ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonCriterion {
    pub id: CriterionId,
    pub name: &'static str,
    pub description: &'static str,
    /// Fraction in `(0, 1]`; all weights sum to `1.0`.
    pub weight: f64,
    pub category: CriterionCategory,
}

impl ComparisonCriterion {
    /// Weight in basis points (1/10 000), used for exact integer summation.
    #[must_use]
    pub fn weight_bp(&self) -> u32 {
        (self.weight * 10_000.0).round() as u32
    }

    /// True for criteria where a lower qualitative level is better.
    #[must_use]
    pub const fn lower_is_better(&self) -> bool {
        matches!(self.id, CriterionId::Cost | CriterionId::Complexity)
    }
}

/// The eight fixed criteria, in [`CriterionId`] order.
pub static CRITERIA: [ComparisonCriterion; 8] = [
    ComparisonCriterion {
        id: CriterionId::Scalability,
        name: "Scalability",
        description: "Ability to absorb growing load and data volume",
        weight: 0.20,
        category: CriterionCategory::Technical,
    },
    ComparisonCriterion {
        id: CriterionId::Maintainability,
        name: "Maintainability",
        description: "Ease of evolving, testing, and fixing the system",
        weight: 0.15,
        category: CriterionCategory::Technical,
    },
    ComparisonCriterion {
        id: CriterionId::Performance,
        name: "Performance",
        description: "Runtime efficiency and request latency",
        weight: 0.15,
        category: CriterionCategory::Technical,
    },
    ComparisonCriterion {
        id: CriterionId::Cost,
        name: "Cost",
        description: "Build and operating cost (lower is better)",
        weight: 0.15,
        category: CriterionCategory::Business,
    },
    ComparisonCriterion {
        id: CriterionId::Complexity,
        name: "Complexity",
        description: "Structural and operational complexity (lower is better)",
        weight: 0.10,
        category: CriterionCategory::Technical,
    },
    ComparisonCriterion {
        id: CriterionId::TimeToMarket,
        name: "Time to Market",
        description: "How soon a first release can ship",
        weight: 0.10,
        category: CriterionCategory::Business,
    },
    ComparisonCriterion {
        id: CriterionId::TeamSize,
        name: "Team Size",
        description: "Size of team the pattern is suited to",
        weight: 0.10,
        category: CriterionCategory::Operational,
    },
    ComparisonCriterion {
        id: CriterionId::Security,
        name: "Security",
        description: "Security posture and isolation between components",
        weight: 0.05,
        category: CriterionCategory::Operational,
    },
];

/// All fixed criteria.
pub fn list_criteria() -> &'static [ComparisonCriterion] {
    &CRITERIA
}

/// Look up the criterion for an id.
pub fn criterion(id: CriterionId) -> &'static ComparisonCriterion {
    // CRITERIA is laid out in CriterionId declaration order.
    &CRITERIA[id as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let total_bp: u32 = CRITERIA.iter().map(ComparisonCriterion::weight_bp).sum();
        assert_eq!(total_bp, 10_000);
        assert!(CRITERIA.iter().all(|c| c.weight > 0.0 && c.weight <= 1.0));
    }

    #[test]
    fn table_follows_id_order() {
        for id in CriterionId::ALL {
            assert_eq!(criterion(*id).id, *id);
        }
        assert_eq!(list_criteria().len(), CriterionId::ALL.len());
    }

    #[test]
    fn only_cost_and_complexity_are_inverted() {
        let inverted: Vec<CriterionId> = CRITERIA
            .iter()
            .filter(|c| c.lower_is_better())
            .map(|c| c.id)
            .collect();
        assert_eq!(inverted, vec![CriterionId::Cost, CriterionId::Complexity]);
    }

    #[test]
    fn serializes_with_camel_case_id() {
        let json = serde_json::to_value(criterion(CriterionId::TimeToMarket)).unwrap();
        assert_eq!(json["id"], "timeToMarket");
        assert_eq!(json["category"], "business");
    }
}
