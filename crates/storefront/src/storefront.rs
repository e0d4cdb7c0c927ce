//! The storefront session.
//!
//! Ties a loaded catalog and config to one shopper's cart and exposes the
//! actions the page offers: browse, add, add a combo, follow a guide and
//! send the quote.

use crate::cart::{Cart, LineKey};
use crate::catalog::{Catalog, LookupIndex};
use crate::checkout::{can_checkout, format_quote, whatsapp_link};
use crate::config::StorefrontConfig;
use crate::search::{self, CatalogQuery, CategoryFilter, CategoryGroup};

/// A shopper session over a read-only catalog.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    config: StorefrontConfig,
    cart: Cart,
}

impl Storefront {
    /// Start a session with an empty cart.
    pub fn new(catalog: Catalog, config: StorefrontConfig) -> Self {
        Self {
            catalog,
            config,
            cart: Cart::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn lookup(&self) -> LookupIndex<'_> {
        self.catalog.lookup()
    }

    /// Grouped listing for the current view state.
    pub fn view(&self, query: &CatalogQuery) -> Vec<CategoryGroup<'_>> {
        search::derive(&self.catalog, query)
    }

    /// Add a variant picked from a product card.
    pub fn add_variant(&mut self, name: &str, code: &str, qty: u32) -> Option<LineKey> {
        let product = self.catalog.product(name)?;
        let variant = product.variant(code);
        self.cart.add(product, variant, qty)
    }

    /// Add a variant by code, optionally pinned to a size.
    pub fn add_code(&mut self, code: &str, size: Option<&str>, qty: u32) -> Option<LineKey> {
        let found = self.catalog.lookup().find(code, size)?;
        self.cart.add(found.product, Some(found.variant), qty)
    }

    /// Add every resolvable item of a combo.
    ///
    /// Returns the number of items applied, or `None` for an unknown combo.
    pub fn add_combo(&mut self, id: &str) -> Option<usize> {
        let combo = self.config.combo(id)?;
        let index = self.catalog.lookup();
        let applied = self.cart.add_lines(combo.expand(&index));
        tracing::debug!(combo = id, applied, "combo added");
        Some(applied)
    }

    /// Category selection for a guide step.
    pub fn pick_guide_step(&self, guide_id: &str, step: usize) -> Option<CategoryFilter> {
        self.config.guide(guide_id)?.pick(step)
    }

    /// Quote text for the current cart.
    pub fn quote(&self) -> String {
        format_quote(&self.cart)
    }

    pub fn can_checkout(&self) -> bool {
        can_checkout(&self.cart)
    }

    /// WhatsApp link for a contact (the first one by default).
    ///
    /// Returns `None` while the cart is empty.
    pub fn checkout_link(&self, contact: Option<usize>) -> Option<String> {
        if !self.can_checkout() {
            return None;
        }
        Some(whatsapp_link(self.config.contact(contact), &self.cart))
    }
}
