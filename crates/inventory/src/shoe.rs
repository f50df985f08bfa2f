use stockroom_core::{DomainError, DomainResult, Entity, ShoeCode, ValueObject};

/// Unit price of a shoe. Always finite and non-negative.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnitCost(f64);

impl UnitCost {
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl ValueObject for UnitCost {
    fn parse_field(raw: &str) -> DomainResult<Self> {
        let cost: f64 = raw
            .trim()
            .parse()
            .map_err(|_| DomainError::malformed("cost", raw, "decimal number"))?;
        if !cost.is_finite() || cost < 0.0 {
            return Err(DomainError::malformed("cost", raw, "non-negative decimal number"));
        }
        Ok(Self(cost))
    }
}

impl core::fmt::Display for UnitCost {
    // Debug formatting keeps a trailing `.0` on whole numbers.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Units on hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity(u64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn new(units: u64) -> Self {
        Self(units)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    pub fn checked_add(self, extra: Quantity) -> DomainResult<Quantity> {
        self.0
            .checked_add(extra.0)
            .map(Quantity)
            .ok_or_else(|| DomainError::validation("quantity overflow"))
    }
}

impl ValueObject for Quantity {
    fn parse_field(raw: &str) -> DomainResult<Self> {
        raw.trim()
            .parse::<u64>()
            .map(Quantity)
            .map_err(|_| DomainError::malformed("quantity", raw, "non-negative whole number"))
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One inventory line: where a shoe is made, its code, name, price and stock.
#[derive(Debug, Clone, PartialEq)]
pub struct Shoe {
    country: String,
    code: ShoeCode,
    product: String,
    cost: UnitCost,
    quantity: Quantity,
}

impl Shoe {
    pub fn new(
        country: impl Into<String>,
        code: impl Into<ShoeCode>,
        product: impl Into<String>,
        cost: UnitCost,
        quantity: Quantity,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    /// Build a shoe from raw text fields.
    ///
    /// Either both numeric fields parse and a shoe is returned, or nothing is
    /// built at all.
    pub fn from_fields(
        country: &str,
        code: &str,
        product: &str,
        cost: &str,
        quantity: &str,
    ) -> DomainResult<Self> {
        let cost = UnitCost::parse_field(cost)?;
        let quantity = Quantity::parse_field(quantity)?;
        Ok(Self::new(country, code, product, cost, quantity))
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn code(&self) -> &ShoeCode {
        &self.code
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn cost(&self) -> UnitCost {
        self.cost
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Stock value of this line: `cost * quantity`.
    pub fn value(&self) -> f64 {
        self.cost.get() * self.quantity.get() as f64
    }

    pub(crate) fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}

impl Entity for Shoe {
    type Id = ShoeCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

impl core::fmt::Display for Shoe {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Country: {}, Code: {}, Product: {}, Cost: {}, Quantity: {}",
            self.country, self.code, self.product, self.cost, self.quantity
        )
    }
}
