//! The quote cart.

use serde::{Deserialize, Serialize};

use crate::cart::{CartTotals, CartLine, LineKey, LineRequest, LineTotal};
use crate::catalog::{Product, Variant};
use crate::money::Money;

/// The shopper's cart.
///
/// Lines are kept in insertion order, which is the display order. At most one
/// line exists per [`LineKey`] and every line has a quantity of at least 1.
/// The subtotal is never stored; it is summed from the lines on each read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` units of a variant.
    ///
    /// Does nothing when `variant` is `None`. If the product/variant pair is
    /// already in the cart its quantity grows in place; otherwise a new line
    /// is appended with the variant's current price. A zero quantity counts
    /// as one unit.
    ///
    /// Returns the key of the affected line.
    pub fn add(&mut self, product: &Product, variant: Option<&Variant>, qty: u32) -> Option<LineKey> {
        let variant = variant?;
        let key = LineKey::of(product, variant);
        let qty = qty.max(1);

        // Check if the line already exists
        if let Some(existing) = self.lines.iter_mut().find(|l| key.matches(l)) {
            existing.qty = existing.qty.saturating_add(qty);
            tracing::debug!(line = %key, qty = existing.qty, "cart line merged");
            return Some(key);
        }

        self.lines.push(CartLine::new(product, variant, qty));
        tracing::debug!(line = %key, qty, "cart line added");
        Some(key)
    }

    /// Add several requests, one [`Cart::add`] at a time.
    ///
    /// Requests that share a key merge with each other exactly as separate
    /// adds would. Returns the number of requests applied.
    pub fn add_lines<'a, I>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = LineRequest<'a>>,
    {
        lines
            .into_iter()
            .filter_map(|req| self.add(req.product, Some(req.variant), req.qty))
            .count()
    }

    /// Set the quantity of a line.
    ///
    /// A quantity of zero or less removes the line. Returns whether a line
    /// with this key existed.
    pub fn update_qty(&mut self, key: &LineKey, qty: i64) -> bool {
        if qty <= 0 {
            return self.remove(key);
        }

        match self.lines.iter_mut().find(|l| key.matches(l)) {
            Some(line) => {
                line.qty = u32::try_from(qty).unwrap_or(u32::MAX);
                tracing::debug!(line = %key, qty = line.qty, "cart line updated");
                true
            }
            None => false,
        }
    }

    /// Add one unit to a line.
    pub fn increment(&mut self, key: &LineKey) -> bool {
        match self.get(key) {
            Some(line) => {
                let qty = i64::from(line.qty) + 1;
                self.update_qty(key, qty)
            }
            None => false,
        }
    }

    /// Take one unit from a line, never going below 1.
    pub fn decrement(&mut self, key: &LineKey) -> bool {
        match self.get(key) {
            Some(line) => {
                let qty = (i64::from(line.qty) - 1).max(1);
                self.update_qty(key, qty)
            }
            None => false,
        }
    }

    /// Remove a line. Returns whether it was present.
    pub fn remove(&mut self, key: &LineKey) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| !key.matches(l));
        let removed = self.lines.len() < len_before;
        if removed {
            tracing::debug!(line = %key, "cart line removed");
        }
        removed
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        tracing::debug!("cart cleared");
    }

    /// Sum of price times quantity over all lines.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::total).sum()
    }

    /// Lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by key.
    pub fn get(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| key.matches(l))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (the cart badge count).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.qty)).sum()
    }

    /// Per-line and overall totals.
    pub fn totals(&self) -> CartTotals {
        let lines: Vec<LineTotal> = self
            .lines
            .iter()
            .map(|line| LineTotal {
                key: line.key(),
                unit_price: line.price,
                qty: line.qty,
                total: line.total(),
            })
            .collect();

        CartTotals {
            subtotal: lines.iter().map(|l| l.total).sum(),
            line_count: lines.len(),
            item_count: self.item_count(),
            lines,
        }
    }
}
