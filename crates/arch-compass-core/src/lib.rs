//! # Arch Compass Core
//!
//! The architecture-pattern comparison engine: data model, catalog store
//! abstraction, per-criterion scoring, weighted ranking, and reasoning.
//!
//! This crate contains no tokio, sqlx, filesystem I/O, or other
//! runtime-specific dependencies. Everything past catalog retrieval is a
//! pure, synchronous function of its inputs.
//!
//! ## Pipeline
//!
//! ```text
//! PatternStore ──▶ validate ──▶ score ──▶ rank ──▶ explain ──▶ ComparisonResult
//!  (records)      (models)    (scoring) (ranking) (reasoning)     (compare)
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Patterns, records, context, scored results |
//! | [`criteria`] | The eight fixed weighted criteria |
//! | [`scoring`] | Qualitative level → 1..=3 score |
//! | [`ranking`] | Weighted totals and stable ordering |
//! | [`reasoning`] | Context-aware justification sentences |
//! | [`compare`] | Orchestrator and catalog read API |
//! | [`catalog`] | Built-in seed patterns |
//! | [`store`] | `PatternStore` trait and in-memory backend |
//! | [`error`] | `CompareError` taxonomy |

pub mod catalog;
pub mod compare;
pub mod criteria;
pub mod error;
pub mod models;
pub mod ranking;
pub mod reasoning;
pub mod scoring;
pub mod store;

pub use compare::{compare, compare_patterns, get_pattern, list_patterns};
pub use criteria::{list_criteria, ComparisonCriterion};
pub use error::CompareError;
pub use models::{
    ArchitecturePattern, ComparisonResult, PatternFilter, PatternRecord, ProjectContext,
    ScoredPattern,
};
