//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `table` - Decision table storage (CSV files, in-memory)

pub mod table;

pub use table::{InMemoryTableStorage, LocalCsvTableStorage};
