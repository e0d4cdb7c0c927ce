//! Listing pipeline.
//!
//! Turns the catalog plus the shopper's query into the grouped view shown on
//! the page: filter by text, filter by category, sort, then group by
//! category. Everything here is a pure function of its inputs; results are
//! recomputed on every call.

pub mod collate;
mod query;
mod results;

pub use query::{CatalogQuery, CategoryFilter, SortMode};
pub use results::{group_by_category, product_count, CategoryGroup};

use crate::catalog::{Catalog, Product};

/// Filter and sort the catalog without grouping.
pub fn filter_and_sort<'a>(catalog: &'a Catalog, query: &CatalogQuery) -> Vec<&'a Product> {
    let needle = query.needle();

    let mut list: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| match &needle {
            Some(needle) => p.search_haystack().contains(needle.as_str()),
            None => true,
        })
        .filter(|p| query.category.matches(&p.category))
        .collect();

    // Stable sorts: ties keep catalog order.
    match query.sort {
        SortMode::Name => list.sort_by(|a, b| collate::compare(&a.name, &b.name)),
        SortMode::PriceAsc => list.sort_by_key(|p| p.first_price()),
        SortMode::PriceDesc => list.sort_by(|a, b| b.first_price().cmp(&a.first_price())),
    }

    list
}

/// Derive the grouped listing for a query.
pub fn derive<'a>(catalog: &'a Catalog, query: &CatalogQuery) -> Vec<CategoryGroup<'a>> {
    let list = filter_and_sort(catalog, query);
    let groups = group_by_category(&list);
    tracing::debug!(
        text = %query.text,
        category = query.category.label(),
        sort = %query.sort,
        products = list.len(),
        groups = groups.len(),
        "listing derived"
    );
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Variant;
    use crate::money::Money;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("Shampoo Neutro", "Shampoos")
                .with_subtitle("pH neutro")
                .with_variant(Variant::new("1 L", "SHN1", Money::from_cents(15000))),
            Product::new("Enjuague Multifibras", "Enjuagues")
                .with_variant(Variant::new("1 L", "EMLF1", Money::from_cents(18000))),
            Product::new("Aditivo Booster", "Aditivos")
                .with_appearance("Polvo blanco")
                .with_variant(Variant::new("2 kg", "ABS2", Money::from_cents(45000))),
            Product::new("Shampoo Alcalino", "Shampoos")
                .with_variant(Variant::new("1 L", "SHA1", Money::from_cents(9000))),
            Product::new("Cepillo", "Complementos"),
        ])
    }

    fn names<'a>(groups: &[CategoryGroup<'a>]) -> Vec<&'a str> {
        groups
            .iter()
            .flat_map(|g| g.products.iter().map(|p| p.name.as_str()))
            .collect()
    }

    #[test]
    fn test_default_query_lists_everything_grouped() {
        let catalog = catalog();
        let groups = derive(&catalog, &CatalogQuery::new());

        let categories: Vec<&str> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec!["Aditivos", "Complementos", "Enjuagues", "Shampoos"]);
        assert_eq!(
            names(&groups),
            vec![
                "Aditivo Booster",
                "Cepillo",
                "Enjuague Multifibras",
                "Shampoo Alcalino",
                "Shampoo Neutro"
            ]
        );
    }

    #[test]
    fn test_text_matches_any_searchable_field() {
        let catalog = catalog();

        let by_code = filter_and_sort(&catalog, &CatalogQuery::new().with_text("  emlf "));
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].name, "Enjuague Multifibras");

        let by_subtitle = filter_and_sort(&catalog, &CatalogQuery::new().with_text("PH NEUTRO"));
        assert_eq!(by_subtitle.len(), 1);

        let by_appearance = filter_and_sort(&catalog, &CatalogQuery::new().with_text("polvo"));
        assert_eq!(by_appearance[0].name, "Aditivo Booster");

        let by_category = filter_and_sort(&catalog, &CatalogQuery::new().with_text("shampoos"));
        assert_eq!(by_category.len(), 2);
    }

    #[test]
    fn test_category_filter() {
        let catalog = catalog();
        let query = CatalogQuery::new().with_category(CategoryFilter::only("Shampoos"));
        let groups = derive(&catalog, &query);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn test_text_and_category_combine() {
        let catalog = catalog();
        let query = CatalogQuery::new()
            .with_text("neutro")
            .with_category(CategoryFilter::only("Enjuagues"));
        assert!(derive(&catalog, &query).is_empty());
    }

    #[test]
    fn test_price_sorts_within_groups() {
        let catalog = catalog();

        let asc = derive(&catalog, &CatalogQuery::new().with_sort(SortMode::PriceAsc));
        let shampoos = asc.iter().find(|g| g.category == "Shampoos").unwrap();
        assert_eq!(shampoos.products[0].name, "Shampoo Alcalino");

        let desc = derive(&catalog, &CatalogQuery::new().with_sort(SortMode::PriceDesc));
        let shampoos = desc.iter().find(|g| g.category == "Shampoos").unwrap();
        assert_eq!(shampoos.products[0].name, "Shampoo Neutro");

        // Groups stay alphabetical whatever the product sort.
        assert_eq!(desc[0].category, "Aditivos");
    }

    #[test]
    fn test_product_without_variants_sorts_as_zero() {
        let catalog = catalog();
        let asc = filter_and_sort(&catalog, &CatalogQuery::new().with_sort(SortMode::PriceAsc));
        assert_eq!(asc[0].name, "Cepillo");
        let desc = filter_and_sort(&catalog, &CatalogQuery::new().with_sort(SortMode::PriceDesc));
        assert_eq!(desc.last().unwrap().name, "Cepillo");
    }

    #[test]
    fn test_derive_is_repeatable() {
        let catalog = catalog();
        let query = CatalogQuery::new()
            .with_text("o")
            .with_sort(SortMode::PriceDesc);
        assert_eq!(derive(&catalog, &query), derive(&catalog, &query));
    }
}
