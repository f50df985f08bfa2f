use tracing::debug;

use stockroom_core::{DomainError, DomainResult, Entity};

use crate::restock::{RestockAmount, RestockPlan};
use crate::shoe::Shoe;

/// Stock value of one inventory line.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemValue {
    pub product: String,
    pub value: f64,
}

/// In-memory, insertion-ordered collection of shoes.
///
/// Duplicated codes are allowed; lookups and scans resolve ties by taking the
/// first shoe in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    shoes: Vec<Shoe>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    pub fn push(&mut self, shoe: Shoe) {
        self.shoes.push(shoe);
    }

    pub fn get(&self, position: usize) -> Option<&Shoe> {
        self.shoes.get(position)
    }

    /// All shoes in insertion order, or `EmptyInventory` when there are none.
    pub fn list(&self) -> DomainResult<impl Iterator<Item = &Shoe>> {
        self.ensure_not_empty()?;
        Ok(self.shoes.iter())
    }

    fn ensure_not_empty(&self) -> DomainResult<()> {
        if self.shoes.is_empty() {
            return Err(DomainError::EmptyInventory);
        }
        Ok(())
    }

    /// Position of the shoe with the smallest quantity (first among ties).
    fn lowest_quantity_position(&self) -> DomainResult<usize> {
        self.ensure_not_empty()?;
        // min_by_key returns the first of several equal minima.
        self.shoes
            .iter()
            .enumerate()
            .min_by_key(|(_, shoe)| shoe.quantity())
            .map(|(position, _)| position)
            .ok_or(DomainError::EmptyInventory)
    }

    /// Shoe with the largest quantity (first among ties).
    pub fn highest_quantity(&self) -> DomainResult<&Shoe> {
        self.ensure_not_empty()?;
        // Not max_by_key: it keeps the last of several equal maxima.
        self.shoes
            .iter()
            .reduce(|best, shoe| if shoe.quantity() > best.quantity() { shoe } else { best })
            .ok_or(DomainError::EmptyInventory)
    }

    /// First shoe whose code equals `code` exactly.
    ///
    /// The whole inventory is scanned before `NotFound` is reported, so a miss
    /// yields exactly one error regardless of size.
    pub fn find_by_code(&self, code: &str) -> DomainResult<&Shoe> {
        self.ensure_not_empty()?;
        self.shoes
            .iter()
            .find(|shoe| *shoe.id() == *code)
            .ok_or_else(|| DomainError::not_found(code))
    }

    /// `(product, cost * quantity)` for every shoe, in insertion order.
    pub fn valuations(&self) -> DomainResult<Vec<ItemValue>> {
        self.ensure_not_empty()?;
        Ok(self
            .shoes
            .iter()
            .map(|shoe| ItemValue {
                product: shoe.product().to_string(),
                value: shoe.value(),
            })
            .collect())
    }

    /// Select the lowest-quantity shoe for restocking.
    pub fn plan_restock(&self) -> DomainResult<RestockPlan> {
        let position = self.lowest_quantity_position()?;
        Ok(RestockPlan {
            position,
            previous: self.shoes[position].quantity(),
        })
    }

    /// Add `amount` to the planned shoe. Nothing changes on error.
    pub fn apply_restock(
        &mut self,
        plan: &RestockPlan,
        amount: RestockAmount,
    ) -> DomainResult<&Shoe> {
        let shoe = self
            .shoes
            .get_mut(plan.position)
            .ok_or_else(|| DomainError::validation("restock target no longer exists"))?;
        let updated = plan.previous.checked_add(amount.quantity())?;
        shoe.set_quantity(updated);
        debug!(code = %shoe.code(), from = %plan.previous, to = %updated, "restocked");
        Ok(shoe)
    }

    /// Put the planned shoe back to the quantity it had when planned.
    pub fn revert_restock(&mut self, plan: &RestockPlan) {
        if let Some(shoe) = self.shoes.get_mut(plan.position) {
            shoe.set_quantity(plan.previous);
        }
    }
}

impl FromIterator<Shoe> for Inventory {
    fn from_iter<T: IntoIterator<Item = Shoe>>(iter: T) -> Self {
        Self {
            shoes: iter.into_iter().collect(),
        }
    }
}
