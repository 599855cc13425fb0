//! Data model for architecture patterns and comparison results.
//!
//! Two representations of a pattern exist:
//!
//! - [`PatternRecord`] is the loosely-typed shape a catalog backend stores
//!   (category and characteristics as plain strings).
//! - [`ArchitecturePattern`] is the validated, strongly-typed shape the
//!   engine scores.
//!
//! Converting a record into a pattern is the single place where missing or
//! out-of-domain values are detected, raising
//! [`CompareError::DataIntegrity`].
//!
//! All serialized names are camelCase (`teamSize`, `timeToMarket`,
//! `weightedScore`) and enumerated values are lowercase.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CompareError;

/// Defines a closed set of qualitative values with string conversions.
///
/// Parsing is case-insensitive and ignores surrounding whitespace.
macro_rules! qualitative {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant,)+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        let allowed: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        format!("'{}' is not one of: {}", s, allowed.join(", "))
                    })
            }
        }
    };
}

qualitative! {
    /// Architectural family a pattern belongs to.
    Category {
        Monolithic => "monolithic",
        Microservices => "microservices",
        Serverless => "serverless",
        EventDriven => "event-driven",
        Layered => "layered",
        Hexagonal => "hexagonal",
    }
}

qualitative! {
    /// Three-step qualitative scale used by most characteristics and by
    /// the budget, scale, and complexity fields of a [`ProjectContext`].
    Level {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

qualitative! {
    /// Team size a pattern suits, or the size of the caller's team.
    TeamSize {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

qualitative! {
    /// How quickly a pattern gets a first release out.
    TimeToMarket {
        Fast => "fast",
        Medium => "medium",
        Slow => "slow",
    }
}

qualitative! {
    /// Delivery timeline of the caller's project.
    Timeline {
        Short => "short",
        Medium => "medium",
        Long => "long",
    }
}

qualitative! {
    /// Identifier of a weighted comparison criterion.
    ///
    /// Every criterion maps 1:1 onto a field of [`Characteristics`]; the
    /// string form doubles as the characteristic key in a [`PatternRecord`].
    /// Declaration order is the fixed criteria order, so maps keyed by
    /// `CriterionId` iterate highest weight first.
    CriterionId {
        Scalability => "scalability",
        Maintainability => "maintainability",
        Performance => "performance",
        Cost => "cost",
        Complexity => "complexity",
        TimeToMarket => "timeToMarket",
        TeamSize => "teamSize",
        Security => "security",
    }
}

/// Qualitative attributes of a pattern.
///
/// `security` is not part of the classic characteristics set but is
/// required here, since the `security` criterion carries weight in ranking
/// and must have a concrete source value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristics {
    pub complexity: Level,
    pub scalability: Level,
    pub maintainability: Level,
    pub performance: Level,
    pub cost: Level,
    pub team_size: TeamSize,
    pub time_to_market: TimeToMarket,
    pub security: Level,
}

impl Characteristics {
    /// String form of the value backing `criterion`.
    #[must_use]
    pub const fn value_str(&self, criterion: CriterionId) -> &'static str {
        match criterion {
            CriterionId::Scalability => self.scalability.as_str(),
            CriterionId::Maintainability => self.maintainability.as_str(),
            CriterionId::Performance => self.performance.as_str(),
            CriterionId::Cost => self.cost.as_str(),
            CriterionId::Complexity => self.complexity.as_str(),
            CriterionId::TimeToMarket => self.time_to_market.as_str(),
            CriterionId::TeamSize => self.team_size.as_str(),
            CriterionId::Security => self.security.as_str(),
        }
    }
}

/// A validated architecture pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitecturePattern {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub use_cases: Vec<String>,
    pub technology_stack: Vec<String>,
    pub characteristics: Characteristics,
}

/// A pattern as held by a catalog backend, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub technology_stack: Vec<String>,
    /// Characteristic name (`"teamSize"`, `"cost"`, …) to value.
    #[serde(default)]
    pub characteristics: BTreeMap<String, String>,
}

impl TryFrom<PatternRecord> for ArchitecturePattern {
    type Error = CompareError;

    fn try_from(record: PatternRecord) -> Result<Self, Self::Error> {
        if record.id.trim().is_empty() {
            return Err(CompareError::data_integrity(
                &record.id,
                "id",
                Some(record.id.as_str()),
            ));
        }
        let category = parse_field(&record.id, "category", Some(record.category.as_str()))?;
        let characteristics = Characteristics {
            complexity: characteristic(&record, CriterionId::Complexity)?,
            scalability: characteristic(&record, CriterionId::Scalability)?,
            maintainability: characteristic(&record, CriterionId::Maintainability)?,
            performance: characteristic(&record, CriterionId::Performance)?,
            cost: characteristic(&record, CriterionId::Cost)?,
            team_size: characteristic(&record, CriterionId::TeamSize)?,
            time_to_market: characteristic(&record, CriterionId::TimeToMarket)?,
            security: characteristic(&record, CriterionId::Security)?,
        };

        Ok(Self {
            id: record.id,
            name: record.name,
            category,
            description: record.description,
            pros: record.pros,
            cons: record.cons,
            use_cases: record.use_cases,
            technology_stack: record.technology_stack,
            characteristics,
        })
    }
}

impl From<&ArchitecturePattern> for PatternRecord {
    fn from(pattern: &ArchitecturePattern) -> Self {
        let characteristics = CriterionId::ALL
            .iter()
            .map(|c| {
                (
                    c.as_str().to_string(),
                    pattern.characteristics.value_str(*c).to_string(),
                )
            })
            .collect();

        Self {
            id: pattern.id.clone(),
            name: pattern.name.clone(),
            category: pattern.category.as_str().to_string(),
            description: pattern.description.clone(),
            pros: pattern.pros.clone(),
            cons: pattern.cons.clone(),
            use_cases: pattern.use_cases.clone(),
            technology_stack: pattern.technology_stack.clone(),
            characteristics,
        }
    }
}

fn characteristic<T: FromStr>(record: &PatternRecord, criterion: CriterionId) -> Result<T, CompareError> {
    let key = criterion.as_str();
    parse_field(
        &record.id,
        key,
        record.characteristics.get(key).map(String::as_str),
    )
}

fn parse_field<T: FromStr>(pattern_id: &str, field: &str, value: Option<&str>) -> Result<T, CompareError> {
    let raw = value.ok_or_else(|| CompareError::data_integrity(pattern_id, field, None))?;
    raw.parse()
        .map_err(|_| CompareError::data_integrity(pattern_id, field, Some(raw)))
}

/// Caller-supplied constraints for one comparison.
///
/// Only used to generate reasoning text; it never changes a score.
/// Omitted fields deserialize as `medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectContext {
    pub team_size: TeamSize,
    pub budget: Level,
    pub timeline: Timeline,
    pub expected_scale: Level,
    pub complexity: Level,
}

impl Default for ProjectContext {
    fn default() -> Self {
        Self {
            team_size: TeamSize::Medium,
            budget: Level::Medium,
            timeline: Timeline::Medium,
            expected_scale: Level::Medium,
            complexity: Level::Medium,
        }
    }
}

/// Optional restrictions applied when listing the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternFilter {
    pub category: Option<Category>,
    pub complexity: Option<Level>,
    pub scalability: Option<Level>,
}

impl PatternFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.complexity.is_none() && self.scalability.is_none()
    }

    /// Whether a raw record passes the filter.
    ///
    /// Values are compared case-insensitively so unnormalized records still
    /// match; records that would fail validation are not excluded here.
    pub fn matches(&self, record: &PatternRecord) -> bool {
        let field_is = |key: &str, wanted: &str| {
            record
                .characteristics
                .get(key)
                .is_some_and(|v| v.trim().eq_ignore_ascii_case(wanted))
        };

        self.category
            .map_or(true, |c| record.category.trim().eq_ignore_ascii_case(c.as_str()))
            && self
                .complexity
                .map_or(true, |l| field_is(CriterionId::Complexity.as_str(), l.as_str()))
            && self
                .scalability
                .map_or(true, |l| field_is(CriterionId::Scalability.as_str(), l.as_str()))
    }
}

/// A pattern decorated with its per-criterion scores and weighted total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPattern {
    #[serde(flatten)]
    pub pattern: ArchitecturePattern,
    /// Weighted sum of the criterion scores, in `[1.0, 3.0]`.
    pub weighted_score: f64,
    /// Score in `{1, 2, 3}` for each of the fixed criteria.
    pub scores: BTreeMap<CriterionId, u8>,
}

/// A runner-up in a [`Recommendation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub pattern: ScoredPattern,
    pub reasoning: Vec<String>,
}

/// The top-ranked pattern with its justification and up to two runners-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub best: ScoredPattern,
    pub reasoning: Vec<String>,
    pub alternatives: Vec<Alternative>,
}

/// Full output of one comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Every compared pattern, highest weighted score first.
    pub patterns: Vec<ScoredPattern>,
    pub recommendation: Recommendation,
    pub project_context: ProjectContext,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record() -> PatternRecord {
        let characteristics = [
            ("complexity", "low"),
            ("scalability", "High"),
            ("maintainability", "medium"),
            ("performance", "medium"),
            ("cost", "low"),
            ("teamSize", "small"),
            ("timeToMarket", "fast"),
            ("security", "medium"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        PatternRecord {
            id: "modular-monolith".to_string(),
            name: "Modular Monolith".to_string(),
            category: "monolithic".to_string(),
            description: String::new(),
            pros: vec![],
            cons: vec![],
            use_cases: vec![],
            technology_stack: vec![],
            characteristics,
        }
    }

    #[test]
    fn record_converts_and_normalizes_case() {
        let pattern = ArchitecturePattern::try_from(record()).unwrap();
        assert_eq!(pattern.category, Category::Monolithic);
        assert_eq!(pattern.characteristics.scalability, Level::High);

        let back = PatternRecord::from(&pattern);
        assert_eq!(back.characteristics["scalability"], "high");
        assert_eq!(back.characteristics.len(), CriterionId::ALL.len());
    }

    #[test]
    fn missing_characteristic_is_data_integrity_error() {
        let mut rec = record();
        rec.characteristics.remove("security");
        match ArchitecturePattern::try_from(rec) {
            Err(CompareError::DataIntegrity { field, value, .. }) => {
                assert_eq!(field, "security");
                assert_eq!(value, "<missing>");
            }
            other => panic!("expected DataIntegrity, got {:?}", other),
        }
    }

    #[test]
    fn unknown_value_is_data_integrity_error() {
        let mut rec = record();
        rec.characteristics
            .insert("timeToMarket".to_string(), "glacial".to_string());
        match ArchitecturePattern::try_from(rec) {
            Err(CompareError::DataIntegrity {
                pattern_id,
                field,
                value,
            }) => {
                assert_eq!(pattern_id, "modular-monolith");
                assert_eq!(field, "timeToMarket");
                assert_eq!(value, "glacial");
            }
            other => panic!("expected DataIntegrity, got {:?}", other),
        }
    }

    #[test]
    fn unknown_category_is_data_integrity_error() {
        let mut rec = record();
        rec.category = "blockchain".to_string();
        assert!(matches!(
            ArchitecturePattern::try_from(rec),
            Err(CompareError::DataIntegrity { field, .. }) if field == "category"
        ));
    }

    #[test]
    fn qualitative_parsing() {
        assert_eq!("event-driven".parse::<Category>(), Ok(Category::EventDriven));
        assert_eq!(" LARGE ".parse::<TeamSize>(), Ok(TeamSize::Large));
        assert_eq!("teamsize".parse::<CriterionId>(), Ok(CriterionId::TeamSize));
        let err = "huge".parse::<Level>().unwrap_err();
        assert_eq!(err, "'huge' is not one of: low, medium, high");
    }

    #[test]
    fn filter_matches_records() {
        let rec = record();
        assert!(PatternFilter::default().matches(&rec));
        assert!(PatternFilter {
            category: Some(Category::Monolithic),
            scalability: Some(Level::High),
            ..Default::default()
        }
        .matches(&rec));
        assert!(!PatternFilter {
            complexity: Some(Level::High),
            ..Default::default()
        }
        .matches(&rec));
    }

    #[test]
    fn project_context_serializes_camel_case() {
        let json = serde_json::to_value(ProjectContext::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "teamSize": "medium",
                "budget": "medium",
                "timeline": "medium",
                "expectedScale": "medium",
                "complexity": "medium"
            })
        );
    }
}
