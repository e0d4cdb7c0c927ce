//! Combo previews.

use anyhow::Result;
use serde::Serialize;
use storefront::Money;

use crate::context::Context;
use crate::output::{price_cell, toned};

#[derive(Serialize)]
struct ComboView<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    tone: &'a str,
    items: Vec<ComboItemView<'a>>,
    total: Money,
}

#[derive(Serialize)]
struct ComboItemView<'a> {
    code: &'a str,
    size: &'a str,
    qty: u32,
    product: Option<&'a str>,
    price: Option<Money>,
}

/// Show every configured combo priced against the catalog.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let lookup = catalog.lookup();

    let views: Vec<ComboView> = ctx
        .config
        .combos
        .iter()
        .map(|combo| ComboView {
            id: &combo.id,
            name: &combo.name,
            description: &combo.description,
            tone: &combo.tone,
            items: combo
                .preview(&lookup)
                .into_iter()
                .map(|preview| ComboItemView {
                    code: &preview.item.code,
                    size: &preview.item.size,
                    qty: preview.item.effective_qty(),
                    product: preview.matched.map(|m| m.product.name.as_str()),
                    price: preview.price(),
                })
                .collect(),
            total: combo.total(&lookup),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&views);
        return Ok(());
    }

    if views.is_empty() {
        ctx.output.warn("No combos configured");
        return Ok(());
    }

    for view in &views {
        ctx.output.line("");
        ctx.output.line(&format!(
            "{} {}",
            toned("   ", view.tone),
            console::style(view.name).bold()
        ));
        if !view.description.is_empty() {
            ctx.output.line(&format!("    {}", console::style(view.description).dim()));
        }
        for item in &view.items {
            let qty = format!("×{}", item.qty);
            match (item.product, item.price) {
                (Some(product), Some(price)) => {
                    let price = price_cell(price);
                    ctx.output.table_row(
                        &[product, item.size, qty.as_str(), price.as_str()],
                        &[34, 8, 4, 12],
                    );
                }
                _ => ctx.output.table_row(
                    &[item.code, item.size, qty.as_str(), "no disponible"],
                    &[34, 8, 4, 12],
                ),
            }
        }
        ctx.output.kv("  Total", &view.total.display());
        ctx.output.kv("  Id", view.id);
    }

    Ok(())
}
