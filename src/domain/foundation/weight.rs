//! Weight value object for a criterion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::TopsisError;

/// A strictly positive, finite criterion weight.
///
/// Weights are used as given; a set of weights does not need to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    /// Creates a weight, returning error unless the value is finite and > 0.
    pub fn try_new(value: f64) -> Result<Self, TopsisError> {
        if value.is_finite() && value > 0.0 {
            Ok(Weight(value))
        } else {
            Err(TopsisError::invalid_weight(value.to_string()))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for Weight {
    type Err = TopsisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.parse().map_err(|_| TopsisError::invalid_weight(s))?;
        Self::try_new(value).map_err(|_| TopsisError::invalid_weight(s))
    }
}

impl TryFrom<f64> for Weight {
    type Error = TopsisError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
