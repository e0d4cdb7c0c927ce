//! Cart totals.

use crate::cart::LineKey;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals breakdown for a cart snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of all line totals.
    pub subtotal: Money,
    /// Number of distinct lines.
    pub line_count: usize,
    /// Total units.
    pub item_count: u64,
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineTotal>,
}

/// Totals for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineTotal {
    /// Line key.
    pub key: LineKey,
    /// Captured unit price.
    pub unit_price: Money,
    /// Quantity.
    pub qty: u32,
    /// unit_price * qty.
    pub total: Money,
}
