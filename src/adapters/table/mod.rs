//! Table adapters - Implementations of DecisionTableStorage.
//!
//! - `LocalCsvTableStorage` - CSV files on the local filesystem
//! - `InMemoryTableStorage` - Map-backed storage for tests and embedding

mod in_memory;
mod local_csv_storage;

pub use in_memory::InMemoryTableStorage;
pub use local_csv_storage::LocalCsvTableStorage;
