//! Catalog, cart and quote engine for a single-page storefront.
//!
//! The storefront has no checkout of its own: shoppers browse a fixed
//! catalog, build a cart and send it to the store as a WhatsApp quote.
//!
//! - **Catalog**: Products, size/price variants, code lookup, category palette
//! - **Search**: Text filter, category filter, sorting, grouping by category
//! - **Cart**: Merge-on-add lines, quantity edits, subtotal
//! - **Combos & guides**: Curated bundles and washing routines
//! - **Checkout**: Quote message and WhatsApp handoff link
//!
//! # Example
//!
//! ```rust
//! use storefront::prelude::*;
//!
//! let catalog = Catalog::new(vec![
//!     Product::new("Enjuague Multifibras", "Enjuagues")
//!         .with_variant(Variant::new("1 L", "EMLF1", Money::from_decimal(180.0))),
//! ]);
//!
//! let mut cart = Cart::new();
//! let found = catalog.lookup().find("emlf1", None).unwrap();
//! cart.add(found.product, Some(found.variant), 2);
//!
//! assert_eq!(cart.subtotal().display(), "$360.00");
//! assert!(format_quote(&cart).ends_with("Subtotal estimado: $360.00 MXN"));
//! ```

pub mod error;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod combo;
pub mod config;
pub mod guide;
pub mod search;
pub mod storefront;

pub use error::StorefrontError;
pub use money::Money;
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StorefrontError;
    pub use crate::money::{Money, CURRENCY_CODE};
    pub use crate::storefront::Storefront;

    // Catalog
    pub use crate::catalog::{
        Catalog, CategoryPalette, Channels, LookupIndex, Product, SalesChannel, Variant,
        VariantMatch,
    };

    // Search
    pub use crate::search::{CatalogQuery, CategoryFilter, CategoryGroup, SortMode};

    // Cart
    pub use crate::cart::{clamp_qty, Cart, CartLine, CartTotals, LineKey, LineRequest};

    // Combos and guides
    pub use crate::combo::{Combo, ComboItem};
    pub use crate::guide::{Guide, GuideStep};

    // Checkout
    pub use crate::checkout::{can_checkout, format_quote, whatsapp_link, Contact};

    // Config
    pub use crate::config::StorefrontConfig;
}
