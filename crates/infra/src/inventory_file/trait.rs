use std::path::PathBuf;

use thiserror::Error;

use stockroom_core::DomainError;
use stockroom_inventory::Shoe;

/// Errors raised by the backing inventory file.
#[derive(Debug, Error)]
pub enum InventoryFileError {
    /// The backing file does not exist.
    #[error("the file '{}' was not found", .0.display())]
    NotFound(PathBuf),

    /// A five-field line carried a cost or quantity that is not a number.
    #[error("data format issue on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: DomainError,
    },

    #[error("failed to {action} '{}': {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InventoryFileError {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result of reading the backing file.
///
/// Shoes parsed before a malformed line are kept; `aborted` carries the error
/// that stopped the read, if any.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub shoes: Vec<Shoe>,
    /// 1-based line numbers ignored because they did not have five fields.
    pub skipped: Vec<usize>,
    pub aborted: Option<InventoryFileError>,
}

impl LoadOutcome {
    pub fn is_complete(&self) -> bool {
        self.aborted.is_none()
    }
}

/// Backing store for the inventory.
///
/// Implementations open the underlying resource per call; nothing is held
/// between operations.
pub trait InventorySource {
    /// Read every record after the header line.
    ///
    /// A missing resource is an `Err`; a malformed record ends the read early
    /// but still returns what was parsed so far.
    fn load(&self) -> Result<LoadOutcome, InventoryFileError>;

    /// Rewrite the stored quantity of every line whose code matches `shoe`.
    ///
    /// All other lines, the header included, are written back unchanged.
    fn persist_quantity(&self, shoe: &Shoe) -> Result<(), InventoryFileError>;
}
