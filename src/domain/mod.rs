//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (impacts, weights, errors)
//! - `analysis` - Pure domain services for TOPSIS scoring and ranking

pub mod analysis;
pub mod foundation;
