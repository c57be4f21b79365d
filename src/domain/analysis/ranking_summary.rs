//! Ranking summary - Labelled scores for reporting.

use serde::{Deserialize, Serialize};

use super::{DecisionMatrix, RankingMethod, ScoreResult};

/// One alternative with its score and rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub label: String,
    pub score: f64,
    pub rank: u32,
}

/// Labelled outcome of a TOPSIS run, in input row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingSummary {
    pub ranking_method: RankingMethod,
    pub alternatives: Vec<RankedAlternative>,
}

impl RankingSummary {
    /// Pairs each matrix label with its scored entry.
    pub fn new(matrix: &DecisionMatrix, result: &ScoreResult, method: RankingMethod) -> Self {
        let alternatives = matrix
            .labels()
            .zip(result.entries())
            .map(|(label, entry)| RankedAlternative {
                label: label.to_string(),
                score: entry.score,
                rank: entry.rank,
            })
            .collect();

        Self {
            ranking_method: method,
            alternatives,
        }
    }

    /// Returns the labels holding rank 1, in input order.
    pub fn best(&self) -> Vec<&str> {
        self.alternatives
            .iter()
            .filter(|a| a.rank == 1)
            .map(|a| a.label.as_str())
            .collect()
    }

    /// Returns the alternatives ordered by rank, ties in input order.
    pub fn by_rank(&self) -> Vec<&RankedAlternative> {
        let mut ordered: Vec<&RankedAlternative> = self.alternatives.iter().collect();
        ordered.sort_by_key(|a| a.rank);
        ordered
    }
}
