//! Application configuration.

use std::path::PathBuf;

/// Name of the backing file, resolved against the working directory.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";

/// Settings for one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub inventory_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_FILE),
        }
    }
}

impl AppConfig {
    pub fn with_inventory_path(path: impl Into<PathBuf>) -> Self {
        Self {
            inventory_path: path.into(),
        }
    }
}
