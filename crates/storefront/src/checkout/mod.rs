//! Checkout handoff.
//!
//! There is no payment step: checkout renders the cart as a quote message
//! and hands it to a WhatsApp conversation with the store.

mod handoff;
mod message;

pub use handoff::{can_checkout, whatsapp_link, Contact, WHATSAPP_BASE};
pub use message::{encode, format_line, format_quote, QUOTE_HEADER};
