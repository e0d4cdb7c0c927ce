//! Interactive shopping session.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use storefront::cart::{clamp_qty, LineKey};
use storefront::search::{CatalogQuery, CategoryFilter, SortMode};
use storefront::Storefront;

use crate::commands::browse::print_groups;
use crate::commands::quote::{print_cart, print_quote, AddSpec};
use crate::context::Context;
use crate::output::price_cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Browse,
    Search,
    Category,
    Sort,
    Guide,
    AddProduct,
    AddCode,
    AddCombo,
    ShowCart,
    EditQty,
    RemoveLine,
    ClearCart,
    SendQuote,
    Quit,
}

impl Action {
    const ALL: [Action; 14] = [
        Action::Browse,
        Action::Search,
        Action::Category,
        Action::Sort,
        Action::Guide,
        Action::AddProduct,
        Action::AddCode,
        Action::AddCombo,
        Action::ShowCart,
        Action::EditQty,
        Action::RemoveLine,
        Action::ClearCart,
        Action::SendQuote,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::Browse => "Browse products",
            Action::Search => "Search",
            Action::Category => "Choose category",
            Action::Sort => "Change sort",
            Action::Guide => "Follow a washing guide",
            Action::AddProduct => "Add product",
            Action::AddCode => "Add by code",
            Action::AddCombo => "Add combo",
            Action::ShowCart => "Show cart",
            Action::EditQty => "Change quantity",
            Action::RemoveLine => "Remove line",
            Action::ClearCart => "Empty cart",
            Action::SendQuote => "Send quote",
            Action::Quit => "Quit",
        }
    }
}

/// Run the shop command.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shop session is interactive; JSON output is not supported");
    }

    let mut store = ctx.storefront()?;
    let mut query = CatalogQuery::new();
    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    ctx.output.header("Storefront");
    ctx.output.info(&format!("{} products loaded", store.catalog().len()));

    loop {
        let prompt = format!(
            "[{} · {} · {}] Cart: {} items, {}",
            if query.text.is_empty() { "*" } else { query.text.as_str() },
            query.category.label(),
            query.sort.display_name(),
            store.cart().item_count(),
            store.cart().subtotal().display()
        );

        let choice = Select::new()
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[choice] {
            Action::Browse => browse(&store, &query, ctx),
            Action::Search => {
                query.text = Input::<String>::new()
                    .with_prompt("Search (empty to clear)")
                    .allow_empty(true)
                    .interact_text()?;
            }
            Action::Category => query.category = choose_category(&store)?,
            Action::Sort => {
                let names: Vec<&str> = SortMode::ALL.iter().map(SortMode::display_name).collect();
                let current = SortMode::ALL.iter().position(|s| *s == query.sort).unwrap_or(0);
                let index = Select::new()
                    .with_prompt("Sort by")
                    .items(&names)
                    .default(current)
                    .interact()?;
                query.sort = SortMode::ALL[index];
            }
            Action::Guide => {
                if let Some(category) = follow_guide(&store)? {
                    query.category = category;
                    browse(&store, &query, ctx);
                }
            }
            Action::AddProduct => add_product(&mut store, &query, ctx)?,
            Action::AddCode => {
                let raw: String = Input::new()
                    .with_prompt("Code (CODE[@SIZE][ xQTY])")
                    .interact_text()?;
                match raw.parse::<AddSpec>() {
                    Ok(spec) => match store.add_code(&spec.code, spec.size.as_deref(), spec.qty) {
                        Some(key) => ctx.output.success(&format!("Added {}", key)),
                        None => ctx.output.warn(&format!("Not in catalog: {}", spec.code)),
                    },
                    Err(e) => ctx.output.warn(&e),
                }
            }
            Action::AddCombo => add_combo(&mut store, ctx)?,
            Action::ShowCart => print_cart(store.cart(), ctx),
            Action::EditQty => {
                if let Some(key) = choose_line(&store, "Line to change")? {
                    let qty: i64 = Input::new()
                        .with_prompt("New quantity (0 removes)")
                        .interact_text()?;
                    store.cart_mut().update_qty(&key, qty);
                    print_cart(store.cart(), ctx);
                }
            }
            Action::RemoveLine => {
                if let Some(key) = choose_line(&store, "Line to remove")? {
                    store.cart_mut().remove(&key);
                    ctx.output.success(&format!("Removed {}", key));
                }
            }
            Action::ClearCart => {
                if !store.cart().is_empty()
                    && Confirm::new()
                        .with_prompt("Empty the cart?")
                        .default(false)
                        .interact()?
                {
                    store.cart_mut().clear();
                    ctx.output.success("Cart emptied");
                }
            }
            Action::SendQuote => {
                if !store.can_checkout() {
                    ctx.output.warn("Add products before sending a quote");
                    continue;
                }
                let contact = choose_contact(&store)?;
                print_cart(store.cart(), ctx);
                print_quote(&store, contact, ctx);
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

fn browse(store: &Storefront, query: &CatalogQuery, ctx: &Context) {
    let groups = store.view(query);
    if groups.is_empty() {
        ctx.output.warn("No products match this search");
        return;
    }
    print_groups(&groups, ctx);
}

fn choose_category(store: &Storefront) -> Result<CategoryFilter> {
    let categories = store.catalog().categories();
    let palette = &store.config().palette;

    let mut items = vec![CategoryFilter::ALL_LABEL.to_string()];
    items.extend(
        categories
            .iter()
            .map(|c| format!("{} ({})", palette.label(c), c)),
    );

    let index = Select::new()
        .with_prompt("Category")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match index {
        0 => CategoryFilter::All,
        i => CategoryFilter::only(categories[i - 1]),
    })
}

fn follow_guide(store: &Storefront) -> Result<Option<CategoryFilter>> {
    let guides = &store.config().guides;
    if guides.is_empty() {
        return Ok(None);
    }

    let titles: Vec<&str> = guides.iter().map(|g| g.title.as_str()).collect();
    let guide = &guides[Select::new()
        .with_prompt("Guide")
        .items(&titles)
        .default(0)
        .interact()?];

    let steps: Vec<&str> = guide.steps.iter().map(|s| s.label.as_str()).collect();
    let Some(step) = Select::new()
        .with_prompt("Step")
        .items(&steps)
        .default(0)
        .interact_opt()?
    else {
        return Ok(None);
    };

    Ok(guide.pick(step))
}

fn add_product(store: &mut Storefront, query: &CatalogQuery, ctx: &Context) -> Result<()> {
    let names: Vec<String> = store
        .view(query)
        .iter()
        .flat_map(|g| g.products.iter().map(|p| p.name.clone()))
        .collect();
    if names.is_empty() {
        ctx.output.warn("No products match this search");
        return Ok(());
    }

    let Some(index) = Select::new()
        .with_prompt("Product")
        .items(&names)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };
    let name = &names[index];

    let variants: Vec<(String, String)> = store
        .catalog()
        .product(name)
        .map(|p| {
            p.variants
                .iter()
                .map(|v| {
                    let label = format!("{} · {} · {}", v.size, v.code, price_cell(v.price));
                    (v.code.clone(), label)
                })
                .collect()
        })
        .unwrap_or_default();
    if variants.is_empty() {
        ctx.output.warn("This product has no presentations to add");
        return Ok(());
    }

    let labels: Vec<&str> = variants.iter().map(|(_, label)| label.as_str()).collect();
    let variant = Select::new()
        .with_prompt("Presentation")
        .items(&labels)
        .default(0)
        .interact()?;

    let qty: i64 = Input::new()
        .with_prompt("Quantity")
        .default(1)
        .interact_text()?;

    if let Some(key) = store.add_variant(name, &variants[variant].0, clamp_qty(qty)) {
        let line_qty = store.cart().get(&key).map_or(0, |l| l.qty);
        ctx.output.success(&format!("{} ×{} in cart", key, line_qty));
    }

    Ok(())
}

fn add_combo(store: &mut Storefront, ctx: &Context) -> Result<()> {
    let combos: Vec<(String, String)> = store
        .config()
        .combos
        .iter()
        .map(|c| {
            let total = c.total(&store.lookup());
            (c.id.clone(), format!("{} · {}", c.name, total.display()))
        })
        .collect();
    if combos.is_empty() {
        ctx.output.warn("No combos configured");
        return Ok(());
    }

    let labels: Vec<&str> = combos.iter().map(|(_, label)| label.as_str()).collect();
    let index = Select::new()
        .with_prompt("Combo")
        .items(&labels)
        .default(0)
        .interact()?;

    let id = &combos[index].0;
    match store.add_combo(id) {
        Some(0) => ctx.output.warn("None of this combo's products are in the catalog"),
        Some(applied) => ctx.output.success(&format!("Added {} products", applied)),
        None => ctx.output.warn(&format!("Unknown combo '{}'", id)),
    }

    Ok(())
}

fn choose_line(store: &Storefront, prompt: &str) -> Result<Option<LineKey>> {
    let lines = store.cart().lines();
    if lines.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = lines
        .iter()
        .map(|l| format!("{} · {} ×{}", l.name, l.size, l.qty))
        .collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(index.map(|i| lines[i].key()))
}

fn choose_contact(store: &Storefront) -> Result<Option<usize>> {
    let contacts = &store.config().contacts;
    if contacts.len() < 2 {
        return Ok(None);
    }

    let labels: Vec<&str> = contacts.iter().map(|c| c.label.as_str()).collect();
    let index = Select::new()
        .with_prompt("Send to")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Some(index))
}
