//! Decision Table - Raw tabular data as read from and written to storage.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TopsisError;

/// A header row plus string records, kept exactly as stored.
///
/// The first column holds alternative labels; the remaining columns hold
/// criterion values that have not been validated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTable {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

impl DecisionTable {
    /// Creates a table from a header row and records.
    pub fn new(headers: Vec<impl Into<String>>, records: Vec<Vec<String>>) -> Self {
        Self {
            headers: headers.into_iter().map(|h| h.into()).collect(),
            records,
        }
    }

    /// Returns the header cells.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the data records.
    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    /// Returns the number of columns in the header row.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns the number of data records.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no data records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a column, one value per record.
    pub fn append_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Result<(), TopsisError> {
        let name = name.into();
        if values.len() != self.records.len() {
            return Err(TopsisError::invalid_shape(format!(
                "column '{}' has {} values for {} rows",
                name,
                values.len(),
                self.records.len()
            )));
        }

        self.headers.push(name);
        for (record, value) in self.records.iter_mut().zip(values) {
            record.push(value);
        }
        Ok(())
    }
}
