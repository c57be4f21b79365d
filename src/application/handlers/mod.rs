//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

mod rank_alternatives;

pub use rank_alternatives::{
    RankAlternativesCommand, RankAlternativesError, RankAlternativesHandler,
    RankAlternativesResult, RANK_COLUMN, SCORE_COLUMN,
};
