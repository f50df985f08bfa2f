//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (malformed
/// input, validation, empty inventory). File IO concerns belong in infra.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Text could not be parsed where a number is required.
    #[error("malformed {field}: {value:?} is not a valid {expected}")]
    MalformedInput {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A quantity to add parsed as a number below zero.
    #[error("quantity cannot be negative")]
    NegativeQuantity,

    /// A value parsed but was rejected (e.g. overflow).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The operation needs at least one shoe in the inventory.
    #[error("no shoes in the inventory")]
    EmptyInventory,

    /// No shoe matched the requested code.
    #[error("no shoe with code {0:?}")]
    NotFound(String),
}

impl DomainError {
    pub fn malformed(
        field: &'static str,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::MalformedInput {
            field,
            value: value.into(),
            expected,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound(code.into())
    }

    /// True for the malformed-input kind, shared by capture, load and restock.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}
