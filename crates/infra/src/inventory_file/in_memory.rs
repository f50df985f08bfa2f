use std::path::PathBuf;
use std::sync::RwLock;

use stockroom_inventory::Shoe;

use super::codec;
use super::r#trait::{InventoryFileError, InventorySource, LoadOutcome};

const IN_MEMORY_NAME: &str = "<memory>";

/// In-memory stand-in for the backing file.
///
/// Intended for tests/dev. `None` contents behave like a missing file.
#[derive(Debug, Default)]
pub struct InMemorySource {
    contents: RwLock<Option<String>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RwLock::new(Some(contents.into())),
        }
    }

    /// Current contents, or `None` if the "file" is missing.
    pub fn contents(&self) -> Option<String> {
        self.contents.read().ok().and_then(|c| c.clone())
    }

    fn read(&self) -> Result<String, InventoryFileError> {
        self.contents()
            .ok_or_else(|| InventoryFileError::NotFound(PathBuf::from(IN_MEMORY_NAME)))
    }
}

impl InventorySource for InMemorySource {
    fn load(&self) -> Result<LoadOutcome, InventoryFileError> {
        Ok(codec::decode(&self.read()?))
    }

    fn persist_quantity(&self, shoe: &Shoe) -> Result<(), InventoryFileError> {
        let current = self.read()?;
        let updated =
            codec::rewrite_quantity(&current, shoe.code().as_str(), shoe.quantity().get());
        let mut contents = self.contents.write().map_err(|_| {
            InventoryFileError::io(
                "write",
                IN_MEMORY_NAME,
                std::io::Error::other("lock poisoned"),
            )
        })?;
        *contents = Some(updated);
        Ok(())
    }
}
