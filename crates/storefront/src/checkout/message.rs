//! Quote message rendering.

use crate::cart::{Cart, CartLine};
use crate::money::CURRENCY_CODE;

/// First line of every quote.
pub const QUOTE_HEADER: &str = "Hola, quisiera cotizar los siguientes productos:";

/// Render one cart line, e.g. `• A — 1L (cód: X1) × 2`.
pub fn format_line(line: &CartLine) -> String {
    format!(
        "\u{2022} {} \u{2014} {} (c\u{f3}d: {}) \u{d7} {}",
        line.name, line.size, line.code, line.qty
    )
}

/// Render the cart as a quote request.
///
/// Layout: header, blank line, one line per cart line in cart order, blank
/// line, subtotal. An empty cart still renders header and subtotal.
pub fn format_quote(cart: &Cart) -> String {
    let mut rows: Vec<String> = Vec::with_capacity(cart.line_count() + 4);
    rows.push(QUOTE_HEADER.to_string());
    rows.push(String::new());
    rows.extend(cart.lines().iter().map(format_line));
    rows.push(String::new());
    rows.push(format!(
        "Subtotal estimado: ${} {}",
        cart.subtotal().format_es_mx(),
        CURRENCY_CODE
    ));
    rows.join("\n")
}

/// Percent-encode text for use as a URL query value.
pub fn encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, Variant};
    use crate::money::Money;

    fn cart_with(lines: &[(&str, &str, &str, f64, u32)]) -> Cart {
        let mut cart = Cart::new();
        for &(name, size, code, price, qty) in lines {
            let product = Product::new(name, "Pisos")
                .with_variant(Variant::new(size, code, Money::from_decimal(price)));
            cart.add(&product, product.variants.first(), qty);
        }
        cart
    }

    #[test]
    fn test_single_line_quote() {
        let cart = cart_with(&[("A", "1L", "X1", 10.0, 2)]);
        let text = format_quote(&cart);

        assert!(text.contains("• A — 1L (cód: X1) × 2"));
        assert!(text.ends_with("Subtotal estimado: $20.00 MXN"));
        assert_eq!(
            text,
            "Hola, quisiera cotizar los siguientes productos:\n\n\
             • A — 1L (cód: X1) × 2\n\n\
             Subtotal estimado: $20.00 MXN"
        );
    }

    #[test]
    fn test_lines_follow_cart_order() {
        let cart = cart_with(&[("B", "4 L", "B4", 100.0, 1), ("A", "1 L", "A1", 50.0, 3)]);
        let text = format_quote(&cart);
        let b = text.find("B4").unwrap();
        let a = text.find("A1").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_thousands_grouping() {
        let cart = cart_with(&[("Tambor", "200 L", "T200", 1234.5, 2)]);
        assert!(format_quote(&cart).ends_with("Subtotal estimado: $2,469.00 MXN"));
    }

    #[test]
    fn test_empty_cart_quote() {
        let text = format_quote(&Cart::new());
        assert_eq!(
            text,
            "Hola, quisiera cotizar los siguientes productos:\n\n\nSubtotal estimado: $0.00 MXN"
        );
    }

    #[test]
    fn test_encode_is_url_safe() {
        let encoded = encode("• A — 1L (cód: X1) × 2\n$20.00");
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('$'));
        assert!(encoded.starts_with("%E2%80%A2%20A"));
        assert!(encoded.is_ascii());
    }
}
