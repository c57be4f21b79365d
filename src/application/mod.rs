//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    RankAlternativesCommand, RankAlternativesError, RankAlternativesHandler,
    RankAlternativesResult, RANK_COLUMN, SCORE_COLUMN,
};
