//! RankAlternativesHandler - Command handler for scoring a decision table.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::ScoringConfig;
use crate::domain::analysis::{Criteria, DecisionMatrix, RankingSummary, TopsisScorer};
use crate::domain::foundation::{ErrorCode, TopsisError};
use crate::ports::{DecisionTableStorage, FilePath, StorageError};

/// Header of the appended score column.
pub const SCORE_COLUMN: &str = "Topsis Score";

/// Header of the appended rank column.
pub const RANK_COLUMN: &str = "Rank";

/// Command to rank the alternatives of a stored decision table.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Comma-separated weights, e.g. `"1,1,2"`.
    pub weights: String,
    /// Comma-separated impacts, e.g. `"+,+,-"`.
    pub impacts: String,
}

/// Result of a successful ranking run.
#[derive(Debug, Clone)]
pub struct RankAlternativesResult {
    pub output_path: FilePath,
    pub summary: RankingSummary,
}

/// Errors that abort a ranking run. Nothing is written when one occurs.
#[derive(Debug, Clone, Error)]
pub enum RankAlternativesError {
    #[error(transparent)]
    Topsis(#[from] TopsisError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RankAlternativesError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RankAlternativesError::Topsis(e) => e.code(),
            RankAlternativesError::Storage(e) => e.code(),
        }
    }
}

/// Handler for ranking alternatives.
pub struct RankAlternativesHandler {
    storage: Arc<dyn DecisionTableStorage>,
    config: ScoringConfig,
}

impl RankAlternativesHandler {
    pub fn new(storage: Arc<dyn DecisionTableStorage>, config: ScoringConfig) -> Self {
        Self { storage, config }
    }

    pub async fn handle(
        &self,
        cmd: RankAlternativesCommand,
    ) -> Result<RankAlternativesResult, RankAlternativesError> {
        // 1. Load and validate inputs
        let mut table = self.storage.read(&cmd.input).await?;
        if let Some(existing) = table
            .headers()
            .iter()
            .find(|h| h.as_str() == SCORE_COLUMN || h.as_str() == RANK_COLUMN)
        {
            return Err(TopsisError::invalid_shape(format!(
                "input already has a '{}' column",
                existing
            ))
            .into());
        }
        let matrix = DecisionMatrix::from_table(&table)?;
        let criteria = Criteria::parse(&cmd.weights, &cmd.impacts)?;
        criteria.ensure_matches(&matrix)?;

        debug!(
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            ranking_method = %self.config.ranking_method,
            "Validated decision matrix"
        );

        // 2. Score
        let result = TopsisScorer::score(&matrix, &criteria, self.config.ranking_method)?;

        // 3. Append result columns
        let scores = result
            .entries()
            .iter()
            .map(|e| self.config.format_score(e.score))
            .collect();
        let ranks = result.entries().iter().map(|e| e.rank.to_string()).collect();
        table.append_column(SCORE_COLUMN, scores)?;
        table.append_column(RANK_COLUMN, ranks)?;

        // 4. Persist
        let output_path = self.storage.write(&cmd.output, &table).await?;
        let summary = RankingSummary::new(&matrix, &result, self.config.ranking_method);

        info!(
            output = %output_path,
            best = ?summary.best(),
            "Ranked alternatives"
        );

        Ok(RankAlternativesResult {
            output_path,
            summary,
        })
    }
}
