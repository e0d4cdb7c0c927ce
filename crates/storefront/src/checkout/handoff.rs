//! WhatsApp link construction.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::checkout::{encode, format_quote};

/// Base URL for WhatsApp click-to-chat links.
pub const WHATSAPP_BASE: &str = "https://wa.me/";

/// A store contact reachable over WhatsApp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Phone number as shown to shoppers.
    pub label: String,
    /// Click-to-chat URL.
    pub href: String,
}

impl Contact {
    /// Contact for a 10-digit Mexican mobile number.
    pub fn whatsapp_mx(number: &str) -> Self {
        Self {
            label: number.to_string(),
            href: format!("{}521{}", WHATSAPP_BASE, number),
        }
    }
}

/// Whether the cart can be sent as a quote.
pub fn can_checkout(cart: &Cart) -> bool {
    !cart.is_empty()
}

/// Build the click-to-chat link carrying the quote for `cart`.
///
/// Without a contact the link opens WhatsApp's generic share target.
pub fn whatsapp_link(contact: Option<&Contact>, cart: &Cart) -> String {
    let text = encode(&format_quote(cart));
    match contact {
        Some(contact) => format!("{}?text={}", contact.href, text),
        None => format!("{}?text={}", WHATSAPP_BASE, text),
    }
}
