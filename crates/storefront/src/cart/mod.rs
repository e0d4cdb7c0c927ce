//! Shopping cart module.
//!
//! Contains the cart, its lines and totals.

mod cart;
mod line;
mod pricing;

pub use cart::Cart;
pub use line::{clamp_qty, CartLine, LineKey, LineRequest};
pub use pricing::{CartTotals, LineTotal};
