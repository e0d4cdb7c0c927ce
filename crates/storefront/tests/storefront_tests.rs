//! End-to-end tests against the bundled catalog and config.
//!
//! These load `data/products.json` and `storefront.toml` from the workspace
//! root, the same files the CLI uses by default.

use std::path::PathBuf;

use storefront::prelude::*;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn load_storefront() -> Storefront {
    let config = StorefrontConfig::load(workspace_root().join("storefront.toml")).unwrap();
    let catalog_path = config.catalog.path.clone().unwrap();
    let catalog = Catalog::load(catalog_path).unwrap();
    Storefront::new(catalog, config)
}

#[test]
fn bundled_catalog_loads() {
    let store = load_storefront();
    assert_eq!(store.catalog().len(), 14);
    assert!(store.catalog().categories().contains(&"Prelavadores"));

    // Lenient prices: numeric strings parse, null is zero.
    let lookup = store.lookup();
    assert_eq!(lookup.find("PLLL4", None).unwrap().variant.price.cents(), 64050);
    assert!(lookup.find("APV500", None).unwrap().variant.price.is_zero());
}

#[test]
fn every_default_combo_resolves() {
    let store = load_storefront();
    let lookup = store.lookup();
    for combo in &store.config().combos {
        assert_eq!(combo.expand(&lookup).len(), combo.items.len(), "{}", combo.id);
    }
}

#[test]
fn combos_share_lines_in_cart() {
    let mut store = load_storefront();
    assert_eq!(store.add_combo("combo-basico-upholstery"), Some(3));
    assert_eq!(store.add_combo("combo-antiolores"), Some(3));

    // EMLF1 appears in both combos.
    let cart = store.cart();
    assert_eq!(cart.line_count(), 5);
    let emlf = cart.lines().iter().find(|l| l.code == "EMLF1").unwrap();
    assert_eq!(emlf.qty, 2);
    assert_eq!(cart.item_count(), 6);
}

#[test]
fn browse_search_and_sort() {
    let store = load_storefront();

    let groups = store.view(&CatalogQuery::new().with_text("  ENJUAGUE "));
    let names: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.products.iter().map(|p| p.name.as_str()))
        .collect();
    assert_eq!(names, vec!["Ácido Cítrico Enjuague", "Enjuague Multifibras"]);

    let groups = store.view(
        &CatalogQuery::new()
            .with_category(CategoryFilter::only("Automotriz"))
            .with_sort(SortMode::PriceDesc),
    );
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].products[0].name, "Sellador Cerámico");
}

#[test]
fn groups_follow_collation_order() {
    let store = load_storefront();
    let groups = store.view(&CatalogQuery::new());
    let categories: Vec<&str> = groups.iter().map(|g| g.category).collect();

    let mut sorted = categories.clone();
    sorted.sort_by(|a, b| storefront::search::collate::compare(a, b));
    assert_eq!(categories, sorted);
    assert_eq!(categories.first(), Some(&"Aditivos"));
}

#[test]
fn quote_round_trip_to_whatsapp() {
    let mut store = load_storefront();
    let key = store.add_code("sc1", Some("1 kg"), 2).unwrap();
    assert_eq!(store.cart().get(&key).unwrap().name, "Sellador Cerámico");

    let quote = store.quote();
    assert!(quote.contains("• Sellador Cerámico — 1 kg (cód: SC1) × 2"));
    assert!(quote.ends_with("Subtotal estimado: $2,501.00 MXN"));

    let link = store.checkout_link(None).unwrap();
    assert!(link.starts_with("https://wa.me/5213313620333?text="));

    assert!(store.cart_mut().update_qty(&key, 0));
    assert!(store.checkout_link(None).is_none());
}
