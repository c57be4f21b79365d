//! Analysis Module - Pure domain services for TOPSIS decision analysis.
//!
//! # Components
//!
//! - `DecisionTable` - Raw header + records as stored
//! - `DecisionMatrix` - Validated numeric alternatives x criteria
//! - `Criteria` - Index-aligned weights and impact directions
//! - `TopsisScorer` - Normalize, weight, ideal points, separations, closeness
//! - `RankingMethod` - Tie policy for turning scores into ranks
//! - `RankingSummary` - Labelled scores and ranks for reporting
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. No ports or
//! adapters are needed since there's no I/O.

mod criteria;
mod decision_matrix;
mod decision_table;
mod ranking;
mod ranking_summary;
mod topsis_scorer;

// Re-export all public types
pub use criteria::{Criteria, LIST_SEPARATOR};
pub use decision_matrix::{Alternative, DecisionMatrix, DecisionMatrixBuilder, MIN_TABLE_COLUMNS};
pub use decision_table::DecisionTable;
pub use ranking::RankingMethod;
pub use ranking_summary::{RankedAlternative, RankingSummary};
pub use topsis_scorer::{
    IdealPoints, ScoreResult, ScoredAlternative, Separation, TopsisAnalysis, TopsisScorer,
};
