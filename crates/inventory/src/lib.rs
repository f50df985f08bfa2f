//! Inventory domain module.
//!
//! This crate contains the shoe record and the in-memory inventory with its
//! queries and restock rule, implemented purely as deterministic domain logic
//! (no IO, no terminal, no storage).

pub mod restock;
pub mod shoe;
pub mod store;

pub use restock::{RestockAmount, RestockPlan};
pub use shoe::{Quantity, Shoe, UnitCost};
pub use store::{Inventory, ItemValue};
