//! Catalog listing.

use anyhow::{bail, Result};
use storefront::catalog::Product;
use storefront::search::{product_count, CatalogQuery, CategoryFilter, CategoryGroup, SortMode};

use super::BrowseArgs;
use crate::context::Context;
use crate::output::price_cell;

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let Some(sort) = SortMode::from_str(&args.sort) else {
        let valid: Vec<&str> = SortMode::ALL.iter().map(SortMode::as_str).collect();
        bail!("Unknown sort '{}'. Expected one of: {}", args.sort, valid.join(", "));
    };

    let store = ctx.storefront()?;
    let query = CatalogQuery::new()
        .with_text(args.query)
        .with_category(CategoryFilter::parse(&args.category))
        .with_sort(sort);

    let groups = store.view(&query);

    if ctx.output.is_json() {
        ctx.output.json(&groups);
        return Ok(());
    }

    if groups.is_empty() {
        ctx.output.warn("No products match this search");
        return Ok(());
    }

    print_groups(&groups, ctx);

    ctx.output.info("");
    ctx.output.info(&format!(
        "{} products · {} · {}",
        product_count(&groups),
        query.category.label(),
        query.sort.display_name()
    ));

    Ok(())
}

/// Print grouped products under their category headers.
pub fn print_groups(groups: &[CategoryGroup<'_>], ctx: &Context) {
    let palette = &ctx.config.palette;
    for group in groups {
        ctx.output.tone_header(
            &format!("{} ({})", group.category, group.len()),
            palette.tone(group.category),
        );
        for product in &group.products {
            print_product(product, ctx);
        }
    }
}

/// Print a product card: name, subtitle, variants and marketplace links.
pub fn print_product(product: &Product, ctx: &Context) {
    ctx.output.list_item(&product.name);
    if let Some(subtitle) = &product.subtitle {
        ctx.output.line(&format!("    {}", console::style(subtitle).dim()));
    }
    if ctx.output.is_verbose() {
        if let Some(appearance) = &product.appearance {
            ctx.output.kv("  Apariencia", appearance);
        }
        if let Some(notes) = &product.notes {
            ctx.output.kv("  Notas", notes);
        }
    }

    for variant in &product.variants {
        let price = price_cell(variant.price);
        ctx.output.table_row(
            &[variant.size.as_str(), variant.code.as_str(), price.as_str()],
            &[10, 10, 12],
        );

        if ctx.output.is_verbose() {
            for (channel, href) in variant.channels.links() {
                ctx.output.kv(&format!("    {}", channel.label()), href);
            }
        }
    }
}
