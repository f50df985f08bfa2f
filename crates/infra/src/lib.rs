//! Infrastructure layer: the backing inventory file.

pub mod inventory_file;

pub use inventory_file::{
    FlatFileSource, InMemorySource, InventoryFileError, InventorySource, LoadOutcome,
};
