//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised while validating or scoring a decision matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopsisError {
    #[error("Invalid shape: {reason}")]
    InvalidShape { reason: String },

    #[error("Column '{column}' must contain only numeric values, got '{value}' in row {row}")]
    NonNumericColumn {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Impact '{symbol}' must be '+' or '-'")]
    InvalidImpact { symbol: String },

    #[error("Weight '{value}' must be a positive number")]
    InvalidWeight { value: String },

    #[error("Criterion '{column}' has zero norm (all values are zero)")]
    DegenerateColumn { column: String },

    #[error("Alternative '{label}' is at zero distance from both ideal points")]
    DegenerateRow { label: String },

    #[error("Score of alternative '{label}' is out of range; distances overflowed")]
    ScoreOverflow { label: String },
}

impl TopsisError {
    /// Creates an invalid shape error.
    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        TopsisError::InvalidShape {
            reason: reason.into(),
        }
    }

    /// Creates a non-numeric column error. `row` is 1-based over data rows.
    pub fn non_numeric(column: impl Into<String>, row: usize, value: impl Into<String>) -> Self {
        TopsisError::NonNumericColumn {
            column: column.into(),
            row,
            value: value.into(),
        }
    }

    /// Creates an invalid impact error.
    pub fn invalid_impact(symbol: impl Into<String>) -> Self {
        TopsisError::InvalidImpact {
            symbol: symbol.into(),
        }
    }

    /// Creates an invalid weight error.
    pub fn invalid_weight(value: impl Into<String>) -> Self {
        TopsisError::InvalidWeight {
            value: value.into(),
        }
    }

    /// Creates a degenerate column error.
    pub fn degenerate_column(column: impl Into<String>) -> Self {
        TopsisError::DegenerateColumn {
            column: column.into(),
        }
    }

    /// Creates a degenerate row error.
    pub fn degenerate_row(label: impl Into<String>) -> Self {
        TopsisError::DegenerateRow {
            label: label.into(),
        }
    }

    /// Creates a score overflow error.
    pub fn score_overflow(label: impl Into<String>) -> Self {
        TopsisError::ScoreOverflow {
            label: label.into(),
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TopsisError::InvalidShape { .. } => ErrorCode::InvalidShape,
            TopsisError::NonNumericColumn { .. } => ErrorCode::NonNumericColumn,
            TopsisError::InvalidImpact { .. } => ErrorCode::InvalidImpact,
            TopsisError::InvalidWeight { .. } => ErrorCode::InvalidWeight,
            TopsisError::DegenerateColumn { .. } => ErrorCode::DegenerateColumn,
            TopsisError::DegenerateRow { .. } => ErrorCode::DegenerateRow,
            TopsisError::ScoreOverflow { .. } => ErrorCode::ScoreOverflow,
        }
    }

    /// Returns true if the error was raised by input validation rather than scoring.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            TopsisError::DegenerateColumn { .. }
                | TopsisError::DegenerateRow { .. }
                | TopsisError::ScoreOverflow { .. }
        )
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    InvalidShape,
    NonNumericColumn,
    InvalidImpact,
    InvalidWeight,

    // Scoring errors
    DegenerateColumn,
    DegenerateRow,
    ScoreOverflow,

    // Infrastructure errors
    FileNotFound,
    IoFailure,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidShape => "INVALID_SHAPE",
            ErrorCode::NonNumericColumn => "NON_NUMERIC_COLUMN",
            ErrorCode::InvalidImpact => "INVALID_IMPACT",
            ErrorCode::InvalidWeight => "INVALID_WEIGHT",
            ErrorCode::DegenerateColumn => "DEGENERATE_COLUMN",
            ErrorCode::DegenerateRow => "DEGENERATE_ROW",
            ErrorCode::ScoreOverflow => "SCORE_OVERFLOW",
            ErrorCode::FileNotFound => "FILE_NOT_FOUND",
            ErrorCode::IoFailure => "IO_FAILURE",
        };
        write!(f, "{}", s)
    }
}
