//! Decision Table Storage Port - Tabular file operations interface.
//!
//! The application layer depends on this trait, while adapters (like
//! LocalCsvTableStorage) provide the implementation.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::analysis::DecisionTable;
use crate::domain::foundation::ErrorCode;

/// Port for reading source tables and persisting ranked results.
///
/// # Contract
///
/// Implementations must:
/// - Treat the first row as the header
/// - Preserve record order and cell text on both read and write
/// - Write atomically (no partial output on failure)
///
/// # Usage
///
/// ```rust,ignore
/// let storage: &dyn DecisionTableStorage = get_storage();
///
/// let table = storage.read(Path::new("data.csv")).await?;
/// let path = storage.write(Path::new("result.csv"), &table).await?;
/// ```
#[async_trait]
pub trait DecisionTableStorage: Send + Sync {
    /// Read a table from `path`.
    ///
    /// # Errors
    ///
    /// - `StorageError::NotFound` if the file doesn't exist
    /// - `StorageError::Malformed` if the content is not a rectangular table
    async fn read(&self, path: &Path) -> Result<DecisionTable, StorageError>;

    /// Write a table to `path`, replacing any existing file.
    ///
    /// # Returns
    ///
    /// The path where the table was written.
    async fn write(&self, path: &Path, table: &DecisionTable) -> Result<FilePath, StorageError>;
}

/// Represents a file path (absolute or relative).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePath(PathBuf);

impl FilePath {
    /// Creates a new file path from a PathBuf.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string (lossy conversion for non-UTF8 paths).
    pub fn to_string_lossy(&self) -> String {
        self.0.to_string_lossy().to_string()
    }

    /// Returns a reference to the inner PathBuf.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Returns the inner PathBuf.
    pub fn into_inner(self) -> PathBuf {
        self.0
    }
}

impl std::fmt::Display for FilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for FilePath {
    fn from(path: &Path) -> Self {
        Self::new(path.to_path_buf())
    }
}

/// Errors that can occur during table storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// File was not found.
    #[error("File '{path}' not found")]
    NotFound { path: String },

    /// Permission denied accessing the file.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// Content could not be read as a table.
    #[error("Malformed table in '{path}': {reason}")]
    Malformed { path: String, reason: String },

    /// IO error during file operation.
    #[error("IO error: {message}")]
    Io { message: String },
}

impl StorageError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a permission denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Creates a malformed table error.
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Maps an `std::io::Error` on `path` to the matching variant.
    pub fn from_io(path: &Path, action: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(path.display().to_string()),
            std::io::ErrorKind::PermissionDenied => {
                Self::permission_denied(path.display().to_string())
            }
            _ => Self::io(format!("Failed to {} {}: {}", action, path.display(), err)),
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            StorageError::NotFound { .. } => ErrorCode::FileNotFound,
            _ => ErrorCode::IoFailure,
        }
    }
}
