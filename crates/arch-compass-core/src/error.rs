//! Error taxonomy for the comparison engine.
//!
//! Every variant is terminal for a single request. The engine is
//! deterministic, so retrying would reproduce the same failure; callers
//! translate these into their own transport-level responses.

use thiserror::Error;

/// Placeholder recorded in [`CompareError::DataIntegrity`] when a field is absent.
pub const MISSING_VALUE: &str = "<missing>";

/// Errors raised while listing, retrieving, or comparing patterns.
#[derive(Debug, Error)]
pub enum CompareError {
    /// The request itself is malformed (e.g. fewer than two pattern ids).
    #[error("validation error: {0}")]
    Validation(String),

    /// Ranking was asked to order fewer than two patterns.
    #[error("at least 2 patterns are required for a comparison, got {got}")]
    InsufficientInput { got: usize },

    /// One or more requested patterns are not in the catalog.
    #[error("pattern not found: {}", ids.join(", "))]
    NotFound { ids: Vec<String> },

    /// A stored pattern is missing a required field or holds a value
    /// outside its enumerated domain.
    #[error("data integrity error: pattern '{pattern_id}' has invalid {field}: {value}")]
    DataIntegrity {
        pattern_id: String,
        field: String,
        value: String,
    },

    /// The catalog backend failed.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl CompareError {
    pub(crate) fn data_integrity(
        pattern_id: &str,
        field: &str,
        value: Option<&str>,
    ) -> Self {
        Self::DataIntegrity {
            pattern_id: pattern_id.to_string(),
            field: field.to_string(),
            value: value.unwrap_or(MISSING_VALUE).to_string(),
        }
    }

    /// True for errors caused by the caller's input rather than the system.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InsufficientInput { .. } | Self::NotFound { .. }
        )
    }
}

pub type Result<T, E = CompareError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_lists_every_id() {
        let err = CompareError::NotFound {
            ids: vec!["ghost".to_string(), "phantom".to_string()],
        };
        assert_eq!(err.to_string(), "pattern not found: ghost, phantom");
        assert!(err.is_client_error());
    }

    #[test]
    fn missing_value_is_labelled() {
        let err = CompareError::data_integrity("monolithic", "security", None);
        assert!(err.to_string().contains("<missing>"));
        assert!(!err.is_client_error());
    }
}
