//! Ranking - Rank assignment from closeness scores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tie policy used when turning scores into ranks.
///
/// Rank 1 is always the highest score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMethod {
    /// `rank = 1 + number of strictly greater scores`. Tied scores share
    /// the better rank.
    #[default]
    Competition,
    /// Tied scores get the mean of the ordinal positions they occupy,
    /// truncated to an integer.
    Average,
}

impl RankingMethod {
    /// Assigns a rank to each score, index-aligned with the input.
    ///
    /// Scores must not be NaN. Ties are exact equality.
    ///
    /// # Edge Cases
    /// - Empty input: Returns empty Vec
    /// - All equal: Competition gives every entry rank 1
    pub fn assign(&self, scores: &[f64]) -> Vec<u32> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let mut ranks = vec![0u32; scores.len()];
        let mut start = 0;
        while start < order.len() {
            let mut end = start;
            while end + 1 < order.len() && scores[order[end + 1]] == scores[order[start]] {
                end += 1;
            }

            // Positions start..=end are 0-based ordinals of one tie group.
            let rank = match self {
                RankingMethod::Competition => start + 1,
                RankingMethod::Average => (start + end + 2) / 2,
            };
            for &index in &order[start..=end] {
                ranks[index] = rank as u32;
            }
            start = end + 1;
        }

        ranks
    }

    /// Returns the configuration name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingMethod::Competition => "competition",
            RankingMethod::Average => "average",
        }
    }
}

impl fmt::Display for RankingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RankingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "competition" => Ok(RankingMethod::Competition),
            "average" => Ok(RankingMethod::Average),
            other => Err(format!(
                "unknown ranking method '{}', expected 'competition' or 'average'",
                other
            )),
        }
    }
}
