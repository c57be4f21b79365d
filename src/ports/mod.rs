//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `DecisionTableStorage` - Reading source tables and persisting ranked results

mod decision_table_storage;

pub use decision_table_storage::{DecisionTableStorage, FilePath, StorageError};
