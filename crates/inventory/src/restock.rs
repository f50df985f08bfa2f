//! Restocking the lowest-stock shoe.
//!
//! A restock is planned first (which shoe, and what it held), then applied
//! with a user-supplied amount. A plan can be reverted if persisting the new
//! quantity fails, leaving the inventory exactly as it was.

use core::num::IntErrorKind;

use stockroom_core::{DomainError, DomainResult};

use crate::shoe::Quantity;

/// Units to add to a shoe during restock.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RestockAmount(Quantity);

impl RestockAmount {
    /// Parse the amount typed at the restock prompt.
    ///
    /// Non-numeric text is malformed input. A negative whole number is
    /// rejected with `NegativeQuantity`, and one too large for a quantity with
    /// a `quantity overflow` validation error.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        let malformed = || DomainError::malformed("quantity to add", raw, "whole number");

        if let Some(digits) = raw.strip_prefix('-') {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            if digits.bytes().all(|b| b == b'0') {
                return Ok(Self(Quantity::ZERO));
            }
            return Err(DomainError::NegativeQuantity);
        }

        match raw.parse::<u64>() {
            Ok(units) => Ok(Self(Quantity::new(units))),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                Err(DomainError::validation("quantity overflow"))
            }
            Err(_) => Err(malformed()),
        }
    }

    pub fn quantity(&self) -> Quantity {
        self.0
    }
}

/// The shoe selected for restocking and its quantity at selection time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RestockPlan {
    pub(crate) position: usize,
    pub(crate) previous: Quantity,
}

impl RestockPlan {
    /// Insertion-order position of the selected shoe.
    pub fn position(&self) -> usize {
        self.position
    }
}
