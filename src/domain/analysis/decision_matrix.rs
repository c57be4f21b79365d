//! Decision Matrix - Validated numeric alternatives x criteria.

use serde::{Deserialize, Serialize};

use super::DecisionTable;
use crate::domain::foundation::TopsisError;

/// Minimum number of columns in a source table: label + two criteria.
pub const MIN_TABLE_COLUMNS: usize = 3;

/// A labelled row of criterion values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub label: String,
    pub values: Vec<f64>,
}

impl Alternative {
    /// Creates a new alternative.
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// The decision matrix: ordered alternatives scored on ordered criteria.
///
/// # Invariants
///
/// - At least one criterion and one alternative
/// - Every alternative has exactly one value per criterion
/// - Every value is finite
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    criteria: Vec<String>,
    alternatives: Vec<Alternative>,
}

impl DecisionMatrix {
    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Validates a raw table into a decision matrix.
    ///
    /// The first column is taken as the label; every other column must
    /// hold finite numbers. Cells are trimmed before parsing.
    ///
    /// # Errors
    ///
    /// - `InvalidShape` if the table has fewer than three columns, no
    ///   records, or a record whose length differs from the header
    /// - `NonNumericColumn` naming the first offending column
    pub fn from_table(table: &DecisionTable) -> Result<Self, TopsisError> {
        if table.column_count() < MIN_TABLE_COLUMNS {
            return Err(TopsisError::invalid_shape(format!(
                "input must contain at least {} columns, found {}",
                MIN_TABLE_COLUMNS,
                table.column_count()
            )));
        }
        if table.is_empty() {
            return Err(TopsisError::invalid_shape("input contains no alternatives"));
        }

        let criteria: Vec<String> = table.headers()[1..].to_vec();
        let mut builder = Self::builder().criteria(criteria.clone());

        for (index, record) in table.records().iter().enumerate() {
            if record.len() != table.column_count() {
                return Err(TopsisError::invalid_shape(format!(
                    "row {} has {} cells, expected {}",
                    index + 1,
                    record.len(),
                    table.column_count()
                )));
            }

            let values = record[1..]
                .iter()
                .zip(&criteria)
                .map(|(cell, column)| parse_criterion_value(cell, column, index + 1))
                .collect::<Result<Vec<f64>, _>>()?;

            builder = builder.alternative(record[0].clone(), values);
        }

        builder.build()
    }

    /// Returns the criterion names.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Returns the alternatives in input order.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Returns the label of each alternative.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.alternatives.iter().map(|a| a.label.as_str())
    }

    /// Returns the value at row `row`, criterion `column`.
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.alternatives
            .get(row)
            .and_then(|a| a.values.get(column))
            .copied()
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }
}

fn parse_criterion_value(cell: &str, column: &str, row: usize) -> Result<f64, TopsisError> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| TopsisError::non_numeric(column, row, cell))
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    criteria: Vec<String>,
    alternatives: Vec<Alternative>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criterion names.
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criteria = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds an alternative.
    pub fn alternative(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.alternatives.push(Alternative::new(label, values));
        self
    }

    /// Builds the decision matrix, checking its invariants.
    pub fn build(self) -> Result<DecisionMatrix, TopsisError> {
        if self.criteria.is_empty() {
            return Err(TopsisError::invalid_shape("matrix has no criteria"));
        }
        if self.alternatives.is_empty() {
            return Err(TopsisError::invalid_shape("matrix has no alternatives"));
        }

        for (index, alternative) in self.alternatives.iter().enumerate() {
            if alternative.values.len() != self.criteria.len() {
                return Err(TopsisError::invalid_shape(format!(
                    "alternative '{}' has {} values, expected {}",
                    alternative.label,
                    alternative.values.len(),
                    self.criteria.len()
                )));
            }
            if let Some(pos) = alternative.values.iter().position(|v| !v.is_finite()) {
                return Err(TopsisError::non_numeric(
                    self.criteria[pos].clone(),
                    index + 1,
                    alternative.values[pos].to_string(),
                ));
            }
        }

        Ok(DecisionMatrix {
            criteria: self.criteria,
            alternatives: self.alternatives,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn phones() -> DecisionTable {
        DecisionTable::new(
            vec!["Model", "Price", "Storage", "Camera"],
            vec![
                record(&["M1", "250", "16", "12"]),
                record(&["M2", " 200 ", "16", "8"]),
                record(&["M3", "300", "32", "16.5"]),
            ],
        )
    }

    #[test]
    fn builder_creates_matrix() {
        let matrix = DecisionMatrix::builder()
            .criteria(vec!["C1", "C2"])
            .alternative("A", vec![1.0, 2.0])
            .alternative("B", vec![3.0, 4.0])
            .build()
            .unwrap();

        assert_eq!(matrix.alternative_count(), 2);
        assert_eq!(matrix.criterion_count(), 2);
        assert_eq!(matrix.value(1, 0), Some(3.0));
        assert_eq!(matrix.value(2, 0), None);
        assert_eq!(matrix.labels().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn builder_rejects_ragged_rows() {
        let err = DecisionMatrix::builder()
            .criteria(vec!["C1", "C2"])
            .alternative("A", vec![1.0])
            .build()
            .unwrap_err();

        assert!(matches!(err, TopsisError::InvalidShape { .. }));
    }

    #[test]
    fn builder_rejects_empty_matrix() {
        let no_criteria = DecisionMatrix::builder()
            .alternative("A", vec![])
            .build();
        let no_alternatives = DecisionMatrix::builder().criteria(vec!["C1"]).build();

        assert!(matches!(no_criteria, Err(TopsisError::InvalidShape { .. })));
        assert!(matches!(no_alternatives, Err(TopsisError::InvalidShape { .. })));
    }

    #[test]
    fn builder_rejects_non_finite_values() {
        let err = DecisionMatrix::builder()
            .criteria(vec!["C1", "C2"])
            .alternative("A", vec![1.0, f64::NAN])
            .build()
            .unwrap_err();

        assert!(matches!(err, TopsisError::NonNumericColumn { ref column, row: 1, .. } if column == "C2"));
    }

    #[test]
    fn from_table_parses_criteria_and_labels() {
        let matrix = DecisionMatrix::from_table(&phones()).unwrap();

        assert_eq!(matrix.criteria(), &["Price", "Storage", "Camera"]);
        assert_eq!(matrix.alternatives()[1], Alternative::new("M2", vec![200.0, 16.0, 8.0]));
        assert_eq!(matrix.value(2, 2), Some(16.5));
    }

    #[test]
    fn from_table_requires_three_columns() {
        let table = DecisionTable::new(vec!["Model", "Price"], vec![record(&["M1", "1"])]);
        let err = DecisionMatrix::from_table(&table).unwrap_err();

        assert!(matches!(err, TopsisError::InvalidShape { .. }));
        assert!(err.to_string().contains("at least 3 columns"));
    }

    #[test]
    fn from_table_requires_records() {
        let table = DecisionTable::new(vec!["Model", "Price", "Storage"], vec![]);
        let err = DecisionMatrix::from_table(&table).unwrap_err();

        assert_eq!(err, TopsisError::invalid_shape("input contains no alternatives"));
    }

    #[test]
    fn from_table_rejects_non_numeric_cells() {
        let table = DecisionTable::new(
            vec!["Model", "Price", "Storage"],
            vec![record(&["M1", "250", "16"]), record(&["M2", "cheap", "8"])],
        );

        let err = DecisionMatrix::from_table(&table).unwrap_err();
        assert_eq!(err, TopsisError::non_numeric("Price", 2, "cheap"));
    }

    #[test]
    fn from_table_rejects_empty_and_non_finite_cells() {
        for bad in ["", "NaN", "inf"] {
            let table = DecisionTable::new(
                vec!["Model", "Price", "Storage"],
                vec![record(&["M1", "250", bad])],
            );
            let err = DecisionMatrix::from_table(&table).unwrap_err();
            assert!(matches!(err, TopsisError::NonNumericColumn { .. }), "accepted {:?}", bad);
        }
    }

    #[test]
    fn from_table_rejects_short_records() {
        let table = DecisionTable::new(
            vec!["Model", "Price", "Storage"],
            vec![record(&["M1", "250"])],
        );

        let err = DecisionMatrix::from_table(&table).unwrap_err();
        assert!(matches!(err, TopsisError::InvalidShape { .. }));
    }

    #[test]
    fn matrix_serializes_to_json() {
        let matrix = DecisionMatrix::from_table(&phones()).unwrap();
        let json = serde_json::to_string(&matrix).unwrap();

        assert!(json.contains("criteria"));
        assert!(json.contains("\"label\":\"M3\""));
    }
}
