//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use crate::error::DomainError;

/// Product code of a shoe (e.g. `SKU44386`).
///
/// Matching is exact and case-sensitive. Codes are free text; uniqueness is
/// not enforced anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShoeCode(String);

impl ShoeCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ShoeCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShoeCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ShoeCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for ShoeCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl FromStr for ShoeCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}
