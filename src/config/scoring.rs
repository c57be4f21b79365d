//! Scoring configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::RankingMethod;

/// Largest number of decimals that still means something for an `f64`.
pub const MAX_SCORE_PRECISION: usize = 17;

/// Scoring configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Tie policy for ranks
    #[serde(default)]
    pub ranking_method: RankingMethod,

    /// Fixed number of decimals for the score column; shortest
    /// round-trip representation when unset
    #[serde(default)]
    pub score_precision: Option<usize>,
}

impl ScoringConfig {
    /// Formats a score for the output table.
    pub fn format_score(&self, score: f64) -> String {
        match self.score_precision {
            Some(precision) => format!("{:.*}", precision, score),
            None => format!("{}", score),
        }
    }

    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.score_precision {
            Some(actual) if actual > MAX_SCORE_PRECISION => Err(ValidationError::InvalidPrecision {
                max: MAX_SCORE_PRECISION,
                actual,
            }),
            _ => Ok(()),
        }
    }
}
