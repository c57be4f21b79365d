//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the TOPSIS domain.

mod errors;
mod impact;
mod weight;

pub use errors::{ErrorCode, TopsisError};
pub use impact::Impact;
pub use weight::Weight;
