//! One-shot quote builder.

use std::str::FromStr;

use anyhow::{bail, Result};
use serde::Serialize;
use storefront::cart::{Cart, CartTotals};
use storefront::Storefront;

use super::QuoteArgs;
use crate::context::Context;
use crate::output::price_cell;

/// A variant request written as `CODE[@SIZE][ xQTY]`.
///
/// The quantity is only read from a trailing `x<digits>` token separated by
/// whitespace, so codes such as `box1` or `X1x4` stay whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddSpec {
    pub code: String,
    pub size: Option<String>,
    pub qty: u32,
}

impl FromStr for AddSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (rest, qty) = match s.rsplit_once(char::is_whitespace) {
            Some((rest, token)) => match token.strip_prefix(['x', 'X']) {
                Some(digits) if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => {
                    let qty = digits
                        .parse::<u32>()
                        .map_err(|_| format!("Quantity too large in '{}'", s))?;
                    (rest.trim_end(), qty)
                }
                _ => (s, 1),
            },
            None => (s, 1),
        };

        let (code, size) = match rest.split_once('@') {
            Some((code, size)) => (code.trim(), Some(size.trim())),
            None => (rest, None),
        };

        if code.is_empty() {
            return Err(format!("Missing code in '{}'", s));
        }

        Ok(Self {
            code: code.to_string(),
            size: size.filter(|size| !size.is_empty()).map(str::to_string),
            qty,
        })
    }
}

#[derive(Serialize)]
struct QuoteView<'a> {
    cart: &'a Cart,
    totals: CartTotals,
    message: String,
    link: Option<String>,
}

/// Run the quote command.
pub fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let specs = args
        .add
        .iter()
        .map(|raw| raw.parse::<AddSpec>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(anyhow::Error::msg)?;

    let contact = match args.contact {
        Some(0) => bail!("Contacts are numbered from 1"),
        Some(n) if n > ctx.config.contacts.len() => bail!(
            "Contact {} does not exist ({} configured)",
            n,
            ctx.config.contacts.len()
        ),
        Some(n) => Some(n - 1),
        None => None,
    };

    let mut store = ctx.storefront()?;

    for spec in &specs {
        if store.add_code(&spec.code, spec.size.as_deref(), spec.qty).is_none() {
            ctx.output.warn(&format!("Not in catalog: {}", describe(spec)));
        }
    }

    for id in &args.combos {
        match store.add_combo(id) {
            Some(applied) => ctx.output.debug(&format!("Combo {}: {} items", id, applied)),
            None => bail!("Unknown combo '{}'", id),
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&QuoteView {
            cart: store.cart(),
            totals: store.cart().totals(),
            message: store.quote(),
            link: store.checkout_link(contact),
        });
        return Ok(());
    }

    if !store.can_checkout() {
        bail!("The cart is empty; add products with --add or --combo");
    }

    print_cart(store.cart(), ctx);
    print_quote(&store, contact, ctx);

    Ok(())
}

/// Print the cart as a table with its subtotal.
pub fn print_cart(cart: &Cart, ctx: &Context) {
    ctx.output.header(&format!("Cart ({} items)", cart.item_count()));
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }

    for (i, line) in cart.lines().iter().enumerate() {
        let index = format!("{}.", i + 1);
        let qty = format!("×{}", line.qty);
        let unit = price_cell(line.price);
        let total = line.total().display();
        ctx.output.table_row(
            &[
                index.as_str(),
                line.name.as_str(),
                line.size.as_str(),
                qty.as_str(),
                unit.as_str(),
                total.as_str(),
            ],
            &[3, 34, 8, 5, 12, 12],
        );
    }
    ctx.output.kv("  Subtotal", &cart.subtotal().display());
}

/// Print the quote message and the WhatsApp link.
pub fn print_quote(store: &Storefront, contact: Option<usize>, ctx: &Context) {
    ctx.output.header("Quote");
    ctx.output.line(&store.quote());

    if let Some(link) = store.checkout_link(contact) {
        ctx.output.line("");
        if let Some(contact) = store.config().contact(contact) {
            ctx.output.kv("WhatsApp", &contact.label);
        }
        ctx.output.success(&link);
    }
}

fn describe(spec: &AddSpec) -> String {
    match &spec.size {
        Some(size) => format!("{} ({})", spec.code, size),
        None => spec.code.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> AddSpec {
        s.parse().unwrap()
    }

    #[test]
    fn test_code_only() {
        assert_eq!(
            parse("EMLF1"),
            AddSpec {
                code: "EMLF1".to_string(),
                size: None,
                qty: 1
            }
        );
    }

    #[test]
    fn test_code_size_qty() {
        let spec = parse("PLFC1.5@1.5 kg x3");
        assert_eq!(spec.code, "PLFC1.5");
        assert_eq!(spec.size.as_deref(), Some("1.5 kg"));
        assert_eq!(spec.qty, 3);
    }

    #[test]
    fn test_code_qty_without_size() {
        let spec = parse("sc1 x2");
        assert_eq!(spec.code, "sc1");
        assert_eq!(spec.size, None);
        assert_eq!(spec.qty, 2);
    }

    #[test]
    fn test_lowercase_code_ending_in_digit_stays_whole() {
        let spec = parse("box1");
        assert_eq!(spec.code, "box1");
        assert_eq!(spec.qty, 1);
        assert_eq!(parse("sc1x2").code, "sc1x2");
    }

    #[test]
    fn test_x_inside_code_is_part_of_code() {
        assert_eq!(parse("X1").code, "X1");
        assert_eq!(parse("X1x4").code, "X1x4");
        assert_eq!(parse("X1 X4").qty, 4);
    }

    #[test]
    fn test_x_without_digits_is_part_of_code() {
        let spec = parse("MAXI@4x1 L");
        assert_eq!(spec.code, "MAXI");
        assert_eq!(spec.size.as_deref(), Some("4x1 L"));
        assert_eq!(spec.qty, 1);
    }

    #[test]
    fn test_empty_size_is_any_size() {
        assert_eq!(parse("NAR150g@").size, None);
    }

    #[test]
    fn test_invalid_specs() {
        assert!("".parse::<AddSpec>().is_err());
        assert!("@1 L".parse::<AddSpec>().is_err());
        assert!("X1 x99999999999".parse::<AddSpec>().is_err());
        assert!("@1 L x2".parse::<AddSpec>().is_err());
    }
}
