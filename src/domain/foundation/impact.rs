//! Impact direction of a criterion.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TopsisError;

/// Whether higher raw values of a criterion are better or worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Higher is better (`+`).
    Benefit,
    /// Lower is better (`-`).
    Cost,
}

impl Impact {
    /// Parses an impact from its symbol, returning error for anything but `+` or `-`.
    pub fn from_symbol(symbol: &str) -> Result<Self, TopsisError> {
        match symbol {
            "+" => Ok(Impact::Benefit),
            "-" => Ok(Impact::Cost),
            other => Err(TopsisError::invalid_impact(other)),
        }
    }

    /// Returns the symbol used on the command line.
    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Benefit => "+",
            Impact::Cost => "-",
        }
    }

    /// Returns the opposite direction.
    pub fn flipped(&self) -> Self {
        match self {
            Impact::Benefit => Impact::Cost,
            Impact::Cost => Impact::Benefit,
        }
    }

    /// Picks `(best, worst)` from a column's `(max, min)`.
    pub fn ideal_pair(&self, max: f64, min: f64) -> (f64, f64) {
        match self {
            Impact::Benefit => (max, min),
            Impact::Cost => (min, max),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
