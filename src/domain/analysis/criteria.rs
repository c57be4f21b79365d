//! Criteria - Index-aligned weights and impact directions.

use serde::{Deserialize, Serialize};

use super::DecisionMatrix;
use crate::domain::foundation::{Impact, TopsisError, Weight};

/// Separator for weight and impact lists.
pub const LIST_SEPARATOR: char = ',';

/// Weights and impacts for each criterion, in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    weights: Vec<Weight>,
    impacts: Vec<Impact>,
}

impl Criteria {
    /// Creates criteria from already-validated weights and impacts.
    ///
    /// # Errors
    ///
    /// `InvalidShape` if the lists are empty or differ in length.
    pub fn new(weights: Vec<Weight>, impacts: Vec<Impact>) -> Result<Self, TopsisError> {
        if weights.is_empty() {
            return Err(TopsisError::invalid_shape("at least one criterion is required"));
        }
        if weights.len() != impacts.len() {
            return Err(TopsisError::invalid_shape(format!(
                "number of weights ({}) and impacts ({}) must match",
                weights.len(),
                impacts.len()
            )));
        }
        Ok(Self { weights, impacts })
    }

    /// Parses comma-separated weight and impact lists such as `"1,1,2"` and `"+,-,+"`.
    ///
    /// Whitespace around items is ignored. Weights are checked first, then
    /// the counts, then the impact symbols.
    pub fn parse(weights: &str, impacts: &str) -> Result<Self, TopsisError> {
        let weights = weights
            .split(LIST_SEPARATOR)
            .map(|w| w.trim().parse::<Weight>())
            .collect::<Result<Vec<_>, _>>()?;

        let symbols: Vec<&str> = impacts.split(LIST_SEPARATOR).map(str::trim).collect();
        if symbols.len() != weights.len() {
            return Err(TopsisError::invalid_shape(format!(
                "number of weights ({}) and impacts ({}) must match",
                weights.len(),
                symbols.len()
            )));
        }

        let impacts = symbols
            .into_iter()
            .map(Impact::from_symbol)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(weights, impacts)
    }

    /// Checks that there is exactly one weight and impact per matrix criterion.
    pub fn ensure_matches(&self, matrix: &DecisionMatrix) -> Result<(), TopsisError> {
        if self.len() != matrix.criterion_count() {
            return Err(TopsisError::invalid_shape(format!(
                "number of weights and impacts ({}) must match the number of criterion columns ({})",
                self.len(),
                matrix.criterion_count()
            )));
        }
        Ok(())
    }

    /// Returns the weights.
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    /// Returns the impacts.
    pub fn impacts(&self) -> &[Impact] {
        &self.impacts
    }

    /// Returns the weight of criterion `column`.
    pub fn weight(&self, column: usize) -> f64 {
        self.weights[column].value()
    }

    /// Returns the impact of criterion `column`.
    pub fn impact(&self, column: usize) -> Impact {
        self.impacts[column]
    }

    /// Returns a copy with the impact of criterion `column` reversed.
    pub fn with_flipped_impact(&self, column: usize) -> Self {
        let mut flipped = self.clone();
        if let Some(impact) = flipped.impacts.get_mut(column) {
            *impact = impact.flipped();
        }
        flipped
    }

    /// Returns the number of criteria.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if there are no criteria.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_weights_and_impacts() {
        let criteria = Criteria::parse("1,1,2", "+,+,-").unwrap();

        assert_eq!(criteria.len(), 3);
        assert_eq!(criteria.weight(2), 2.0);
        assert_eq!(criteria.impacts(), &[Impact::Benefit, Impact::Benefit, Impact::Cost]);
    }

    #[test]
    fn parse_ignores_surrounding_whitespace() {
        let criteria = Criteria::parse(" 0.5 , 1.5", "- , +").unwrap();

        assert_eq!(criteria.weight(0), 0.5);
        assert_eq!(criteria.impact(0), Impact::Cost);
        assert_eq!(criteria.impact(1), Impact::Benefit);
    }

    #[test]
    fn parse_rejects_bad_weight() {
        let err = Criteria::parse("1,x,1", "+,+,+").unwrap_err();
        assert_eq!(err, TopsisError::invalid_weight("x"));
    }

    #[test]
    fn parse_rejects_non_positive_weight() {
        let err = Criteria::parse("1,0,1", "+,+,+").unwrap_err();
        assert_eq!(err, TopsisError::invalid_weight("0"));
    }

    #[test]
    fn parse_rejects_count_mismatch() {
        let err = Criteria::parse("1,1,1", "+,-").unwrap_err();
        assert!(matches!(err, TopsisError::InvalidShape { .. }));
    }

    #[test]
    fn parse_rejects_unknown_impact() {
        let err = Criteria::parse("1,1", "+,*").unwrap_err();
        assert_eq!(err, TopsisError::invalid_impact("*"));
    }

    #[test]
    fn parse_rejects_empty_lists() {
        assert!(matches!(
            Criteria::parse("", ""),
            Err(TopsisError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn ensure_matches_checks_criterion_count() {
        let matrix = DecisionMatrix::builder()
            .criteria(vec!["C1", "C2"])
            .alternative("A", vec![1.0, 2.0])
            .build()
            .unwrap();

        assert!(Criteria::parse("1,1", "+,-").unwrap().ensure_matches(&matrix).is_ok());
        let err = Criteria::parse("1,1,1", "+,-,+")
            .unwrap()
            .ensure_matches(&matrix)
            .unwrap_err();
        assert!(matches!(err, TopsisError::InvalidShape { .. }));
    }

    #[test]
    fn with_flipped_impact_changes_only_that_column() {
        let criteria = Criteria::parse("1,1", "+,+").unwrap();
        let flipped = criteria.with_flipped_impact(1);

        assert_eq!(flipped.impacts(), &[Impact::Benefit, Impact::Cost]);
        assert_eq!(flipped.weights(), criteria.weights());
    }
}
