//! In-memory table storage.
//!
//! Keeps tables in a map keyed by path. Useful for tests and for embedding
//! the ranker where tables never touch the filesystem.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::domain::analysis::DecisionTable;
use crate::ports::{DecisionTableStorage, FilePath, StorageError};

/// In-memory decision table storage.
///
/// # Example
///
/// ```ignore
/// let storage = InMemoryTableStorage::new().with_table("data.csv", table);
///
/// handler.handle(cmd).await?;
///
/// assert!(storage.get("result.csv").is_some());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryTableStorage {
    tables: RwLock<HashMap<PathBuf, DecisionTable>>,
}

impl InMemoryTableStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a table at `path`.
    pub fn with_table(mut self, path: impl Into<PathBuf>, table: DecisionTable) -> Self {
        if let Ok(tables) = self.tables.get_mut() {
            tables.insert(path.into(), table);
        }
        self
    }

    /// Returns a copy of the table stored at `path`.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<DecisionTable> {
        self.tables
            .read()
            .ok()
            .and_then(|tables| tables.get(path.as_ref()).cloned())
    }

    /// Returns the number of stored tables.
    pub fn len(&self) -> usize {
        self.tables.read().map(|t| t.len()).unwrap_or(0)
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> StorageError {
    StorageError::io("InMemoryTableStorage: lock poisoned")
}

#[async_trait]
impl DecisionTableStorage for InMemoryTableStorage {
    async fn read(&self, path: &Path) -> Result<DecisionTable, StorageError> {
        let tables = self.tables.read().map_err(|_| poisoned())?;
        tables
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path.display().to_string()))
    }

    async fn write(&self, path: &Path, table: &DecisionTable) -> Result<FilePath, StorageError> {
        let mut tables = self.tables.write().map_err(|_| poisoned())?;
        tables.insert(path.to_path_buf(), table.clone());
        Ok(FilePath::from(path))
    }
}
