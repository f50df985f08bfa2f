//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **compared by value** and constructed only through a
/// validating parser, so a held value always satisfies its invariants.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (`UnitCost(10.0)` equals any other `UnitCost(10.0)`)
/// - **Entity**: Has identity (a shoe is identified by its code)
///
/// ## Construction
///
/// `parse_field` is the single entry point from external text (the backing
/// file or an interactive prompt). It must reject anything that would break
/// the value's invariants with `DomainError::MalformedInput`.
///
/// ```ignore
/// let qty = Quantity::parse_field("5")?;
/// assert_eq!(qty, Quantity::new(5));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Sized {
    /// Parse the value from raw field text.
    fn parse_field(raw: &str) -> crate::DomainResult<Self>;
}
