//! Local CSV Storage Adapter - Implementation of DecisionTableStorage.
//!
//! Reads and writes decision tables as CSV files with a header row.
//! Uses atomic writes so a failed run never leaves a partial result file.

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::domain::analysis::DecisionTable;
use crate::ports::{DecisionTableStorage, FilePath, StorageError};

/// CSV file storage for decision tables.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `{path}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{path}`
///
/// # Usage
///
/// ```rust,ignore
/// let storage = LocalCsvTableStorage::new();
///
/// let table = storage.read(Path::new("data.csv")).await?;
/// storage.write(Path::new("result.csv"), &table).await?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LocalCsvTableStorage {
    delimiter: u8,
}

impl LocalCsvTableStorage {
    /// Creates a comma-delimited storage.
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Creates a storage using a custom field delimiter.
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Returns the temporary file path for atomic writes.
    fn temp_path(path: &Path) -> PathBuf {
        let mut name: OsString = path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Writes and syncs the full content to the temporary file.
    async fn write_temp(temp_path: &Path, content: &[u8]) -> Result<(), StorageError> {
        let mut file = fs::File::create(temp_path)
            .await
            .map_err(|e| StorageError::from_io(temp_path, "create", e))?;
        file.write_all(content)
            .await
            .map_err(|e| StorageError::from_io(temp_path, "write", e))?;
        file.sync_all()
            .await
            .map_err(|e| StorageError::from_io(temp_path, "sync", e))
    }

    /// Removes a leftover temporary file after a failed write.
    async fn discard_temp(temp_path: &Path) {
        match fs::remove_file(temp_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => debug!(
                path = %temp_path.display(),
                error = %e,
                "Failed to remove temporary file"
            ),
        }
    }

    /// Parses CSV bytes into a table.
    fn parse(&self, path: &Path, bytes: &[u8]) -> Result<DecisionTable, StorageError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| StorageError::malformed(path.display().to_string(), e.to_string()))?
            .iter()
            .map(String::from)
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result
                .map_err(|e| StorageError::malformed(path.display().to_string(), e.to_string()))?;
            records.push(record.iter().map(String::from).collect());
        }

        Ok(DecisionTable::new(headers, records))
    }

    /// Serializes a table into CSV bytes.
    fn render(&self, path: &Path, table: &DecisionTable) -> Result<Vec<u8>, StorageError> {
        let to_io = |e: csv::Error| {
            StorageError::io(format!("Failed to encode {}: {}", path.display(), e))
        };

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());
        writer.write_record(table.headers()).map_err(to_io)?;
        for record in table.records() {
            writer.write_record(record).map_err(to_io)?;
        }

        writer
            .into_inner()
            .map_err(|e| StorageError::io(format!("Failed to encode {}: {}", path.display(), e)))
    }
}

impl Default for LocalCsvTableStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DecisionTableStorage for LocalCsvTableStorage {
    async fn read(&self, path: &Path) -> Result<DecisionTable, StorageError> {
        let bytes = fs::read(path)
            .await
            .map_err(|e| StorageError::from_io(path, "read", e))?;

        let table = self.parse(path, &bytes)?;
        debug!(
            path = %path.display(),
            columns = table.column_count(),
            rows = table.row_count(),
            "Read decision table"
        );
        Ok(table)
    }

    async fn write(&self, path: &Path, table: &DecisionTable) -> Result<FilePath, StorageError> {
        let content = self.render(path, table)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::from_io(parent, "create directory", e))?;
        }

        let temp_path = Self::temp_path(path);

        if let Err(e) = Self::write_temp(&temp_path, &content).await {
            Self::discard_temp(&temp_path).await;
            return Err(e);
        }

        if let Err(e) = fs::rename(&temp_path, path).await {
            Self::discard_temp(&temp_path).await;
            return Err(StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )));
        }

        debug!(
            path = %path.display(),
            bytes = content.len(),
            "Wrote decision table"
        );
        Ok(FilePath::from(path))
    }
}
