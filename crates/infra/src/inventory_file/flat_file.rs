use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use stockroom_inventory::Shoe;

use super::codec;
use super::r#trait::{InventoryFileError, InventorySource, LoadOutcome};

/// Comma-delimited text file on disk.
///
/// The file is read in full on every call. Quantity updates are written to a
/// uniquely named temporary file in the same directory that is then renamed
/// into place; it is removed if anything fails before the rename completes.
#[derive(Debug, Clone)]
pub struct FlatFileSource {
    path: PathBuf,
}

impl FlatFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<String, InventoryFileError> {
        fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => InventoryFileError::NotFound(self.path.clone()),
            _ => InventoryFileError::io("read", &self.path, e),
        })
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    fn replace_contents(&self, contents: &str) -> Result<(), InventoryFileError> {
        let dir = self.directory();
        let mut staging =
            NamedTempFile::new_in(dir).map_err(|e| InventoryFileError::io("stage", dir, e))?;
        staging
            .write_all(contents.as_bytes())
            .map_err(|e| InventoryFileError::io("write", staging.path(), e))?;
        // A failed persist hands the temp file back; dropping it deletes it.
        staging
            .persist(&self.path)
            .map_err(|e| InventoryFileError::io("replace", &self.path, e.error))?;
        Ok(())
    }
}

impl InventorySource for FlatFileSource {
    fn load(&self) -> Result<LoadOutcome, InventoryFileError> {
        let contents = self.read()?;
        let outcome = codec::decode(&contents);
        info!(
            path = %self.path.display(),
            loaded = outcome.shoes.len(),
            skipped = outcome.skipped.len(),
            complete = outcome.is_complete(),
            "inventory file loaded"
        );
        Ok(outcome)
    }

    fn persist_quantity(&self, shoe: &Shoe) -> Result<(), InventoryFileError> {
        let contents = self.read()?;
        let updated =
            codec::rewrite_quantity(&contents, shoe.code().as_str(), shoe.quantity().get());
        self.replace_contents(&updated)?;

        debug!(
            path = %self.path.display(),
            code = %shoe.code(),
            quantity = %shoe.quantity(),
            "quantity persisted"
        );
        Ok(())
    }
}
