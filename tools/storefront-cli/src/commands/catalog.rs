//! Category listing and code lookup.

use anyhow::{bail, Result};
use serde::Serialize;

use super::FindArgs;
use crate::commands::browse::print_product;
use crate::context::Context;
use crate::output::{price_cell, toned};

#[derive(Serialize)]
struct CategoryRow<'a> {
    category: &'a str,
    label: &'a str,
    tone: &'a str,
    products: usize,
}

/// List categories with their short label, tone and product count.
pub fn categories(ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let palette = &ctx.config.palette;

    let rows: Vec<CategoryRow> = catalog
        .categories()
        .into_iter()
        .map(|category| CategoryRow {
            category,
            label: palette.label(category),
            tone: palette.tone(category),
            products: catalog
                .products()
                .iter()
                .filter(|p| p.category == category)
                .count(),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Categories");
    for row in &rows {
        ctx.output.line(&format!(
            "  {} {} {}",
            toned(&format!(" {:<12} ", row.label), palette.story_tone(row.category)),
            row.category,
            console::style(format!("({})", row.products)).dim()
        ));
    }

    Ok(())
}

/// Look up a variant by code.
pub fn find(args: FindArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let lookup = catalog.lookup();

    let Some(found) = lookup.find(&args.code, args.size.as_deref()) else {
        match &args.size {
            Some(size) => bail!("No variant with code '{}' and size '{}'", args.code, size),
            None => bail!("No variant with code '{}'", args.code),
        }
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": found.product,
            "variant": found.variant,
        }));
        return Ok(());
    }

    ctx.output.header(&found.product.name);
    ctx.output.kv("Categoría", &found.product.category);
    ctx.output.kv("Presentación", &found.variant.size);
    ctx.output.kv("Código", &found.variant.code);
    ctx.output.kv("Precio", &price_cell(found.variant.price));
    if let Some(image) = found.variant.image.as_deref().or(found.product.display_image()) {
        ctx.output.kv("Imagen", image);
    }
    for (channel, href) in found.variant.channels.links() {
        ctx.output.kv(channel.label(), href);
    }

    if ctx.output.is_verbose() && found.product.variants.len() > 1 {
        ctx.output.info("");
        ctx.output.info("All presentations:");
        print_product(found.product, ctx);
    }

    Ok(())
}
