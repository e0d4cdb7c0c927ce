//! Product bundles ("combos").
//!
//! A combo references variants by code and size. It holds no prices: those
//! come from the catalog when the combo is expanded, so a combo always adds
//! at current catalog prices.

use serde::{Deserialize, Serialize};

use crate::cart::LineRequest;
use crate::catalog::{LookupIndex, VariantMatch};
use crate::money::Money;

/// A curated bundle of variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Combo {
    /// Unique combo identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-line description.
    #[serde(default)]
    pub description: String,
    /// Hex accent color.
    #[serde(default)]
    pub tone: String,
    /// Referenced variants, in display order.
    #[serde(default)]
    pub items: Vec<ComboItem>,
}

/// A variant reference inside a combo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComboItem {
    /// Variant code (case-insensitive).
    pub code: String,
    /// Exact variant size.
    #[serde(default)]
    pub size: String,
    /// Units to add; 0 means 1.
    #[serde(default = "default_qty")]
    pub qty: u32,
}

fn default_qty() -> u32 {
    1
}

impl ComboItem {
    pub fn new(code: impl Into<String>, size: impl Into<String>, qty: u32) -> Self {
        Self {
            code: code.into(),
            size: size.into(),
            qty,
        }
    }

    /// Units this item adds to the cart.
    pub fn effective_qty(&self) -> u32 {
        self.qty.max(1)
    }
}

/// How a combo item resolves against the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComboPreviewItem<'c, 'a> {
    pub item: &'c ComboItem,
    pub matched: Option<VariantMatch<'a>>,
}

impl<'c, 'a> ComboPreviewItem<'c, 'a> {
    /// Name of the matched product, or a generic placeholder.
    pub fn product_name(&self) -> &'a str {
        self.matched.map_or("Producto", |m| m.product.name.as_str())
    }

    /// Unit price of the matched variant.
    pub fn price(&self) -> Option<Money> {
        self.matched.map(|m| m.variant.price)
    }
}

impl Combo {
    /// Resolve the combo into cart requests.
    ///
    /// Items whose code/size is not in the catalog are left out; the rest keep
    /// the combo's order.
    pub fn expand<'a>(&self, index: &LookupIndex<'a>) -> Vec<LineRequest<'a>> {
        self.items
            .iter()
            .filter_map(|item| match index.find(&item.code, Some(item.size.as_str())) {
                Some(m) => Some(LineRequest::new(m.product, m.variant, item.effective_qty())),
                None => {
                    tracing::warn!(
                        combo = %self.id,
                        code = %item.code,
                        size = %item.size,
                        "combo item not found in catalog"
                    );
                    None
                }
            })
            .collect()
    }

    /// Resolve every item for display, keeping misses.
    pub fn preview<'c, 'a>(&'c self, index: &LookupIndex<'a>) -> Vec<ComboPreviewItem<'c, 'a>> {
        self.items
            .iter()
            .map(|item| ComboPreviewItem {
                item,
                matched: index.find(&item.code, Some(item.size.as_str())),
            })
            .collect()
    }

    /// Price of the resolvable part of the combo.
    pub fn total(&self, index: &LookupIndex<'_>) -> Money {
        self.expand(index)
            .iter()
            .map(|req| req.variant.price.times(req.qty))
            .sum()
    }
}
