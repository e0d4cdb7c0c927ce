//! Cart line types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{Product, Variant};
use crate::money::Money;

/// Identity of a cart line: product name plus variant code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineKey {
    pub name: String,
    pub code: String,
}

impl LineKey {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Key of the line a product/variant pair would land in.
    pub fn of(product: &Product, variant: &Variant) -> Self {
        Self::new(product.name.as_str(), variant.code.as_str())
    }

    pub(crate) fn matches(&self, line: &CartLine) -> bool {
        self.name == line.name && self.code == line.code
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.code)
    }
}

/// A line in the cart.
///
/// Name, category, size and price are copied from the catalog when the line
/// is created; later catalog edits never reprice an existing line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product name.
    pub name: String,
    /// Product category.
    pub category: String,
    /// Variant presentation.
    pub size: String,
    /// Variant code.
    pub code: String,
    /// Unit price captured when the line was added.
    pub price: Money,
    /// Quantity, always at least 1.
    pub qty: u32,
}

impl CartLine {
    /// Snapshot a catalog variant into a new line.
    pub fn new(product: &Product, variant: &Variant, qty: u32) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            size: variant.size.clone(),
            code: variant.code.clone(),
            price: variant.price,
            qty,
        }
    }

    pub fn key(&self) -> LineKey {
        LineKey::new(self.name.as_str(), self.code.as_str())
    }

    /// Price times quantity.
    pub fn total(&self) -> Money {
        self.price.times(self.qty)
    }
}

/// A request to add a variant to the cart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineRequest<'a> {
    pub product: &'a Product,
    pub variant: &'a Variant,
    pub qty: u32,
}

impl<'a> LineRequest<'a> {
    pub fn new(product: &'a Product, variant: &'a Variant, qty: u32) -> Self {
        Self {
            product,
            variant,
            qty,
        }
    }
}

/// Clamp a shopper-entered quantity to the smallest allowed value.
///
/// Steppers and typed quantities never go below 1.
pub fn clamp_qty(qty: i64) -> u32 {
    qty.clamp(1, i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display() {
        assert_eq!(LineKey::new("Enjuague", "EMLF1").to_string(), "Enjuague-EMLF1");
    }

    #[test]
    fn test_line_snapshot_and_total() {
        let product = Product::new("Enjuague", "Enjuagues");
        let variant = Variant::new("1 L", "EMLF1", Money::from_cents(18000));
        let line = CartLine::new(&product, &variant, 3);

        assert_eq!(line.key(), LineKey::of(&product, &variant));
        assert_eq!(line.category, "Enjuagues");
        assert_eq!(line.total().cents(), 54000);
    }

    #[test]
    fn test_clamp_qty() {
        assert_eq!(clamp_qty(-4), 1);
        assert_eq!(clamp_qty(0), 1);
        assert_eq!(clamp_qty(7), 7);
        assert_eq!(clamp_qty(i64::MAX), u32::MAX);
    }
}
