//! Backing inventory file boundary.
//!
//! This module defines how shoe records are read from and written back to a
//! comma-delimited text store, independent of where the text lives.

pub mod codec;
pub mod flat_file;
pub mod in_memory;
pub mod r#trait;

pub use flat_file::FlatFileSource;
pub use in_memory::InMemorySource;
pub use r#trait::{InventoryFileError, InventorySource, LoadOutcome};
