//! Code lookup over the catalog.

use std::collections::HashMap;

use crate::catalog::{Catalog, Product, Variant};

/// A resolved product/variant pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantMatch<'a> {
    pub product: &'a Product,
    pub variant: &'a Variant,
}

/// Resolves `(code, size)` references to catalog variants.
///
/// Codes compare case-insensitively; sizes compare exactly. Candidates for a
/// code are kept in catalog order so the first listed variant wins when no
/// size is given.
#[derive(Debug, Clone)]
pub struct LookupIndex<'a> {
    catalog: &'a Catalog,
    by_code: HashMap<String, Vec<(usize, usize)>>,
}

impl<'a> LookupIndex<'a> {
    /// Index every variant of the catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        let mut by_code: HashMap<String, Vec<(usize, usize)>> = HashMap::new();
        for (p, product) in catalog.products().iter().enumerate() {
            for (v, variant) in product.variants.iter().enumerate() {
                by_code
                    .entry(variant.code.to_lowercase())
                    .or_default()
                    .push((p, v));
            }
        }
        Self { catalog, by_code }
    }

    /// Find a variant by code and, optionally, exact size.
    ///
    /// An empty size is treated as absent. A miss is `None`; callers skip the
    /// reference rather than treat it as a failure.
    pub fn find(&self, code: &str, size: Option<&str>) -> Option<VariantMatch<'a>> {
        let size = size.filter(|s| !s.is_empty());
        let products = self.catalog.products();

        self.by_code
            .get(&code.to_lowercase())?
            .iter()
            .map(|&(p, v)| VariantMatch {
                product: &products[p],
                variant: &products[p].variants[v],
            })
            .find(|m| size.map_or(true, |s| m.variant.size == s))
    }

    /// The catalog this index was built from.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("Prelavador Fibras", "Prelavadores")
                .with_variant(Variant::new("1.5 kg", "PLFC1.5", Money::from_cents(32000)))
                .with_variant(Variant::new("4 kg", "PLFC4", Money::from_cents(79000))),
            Product::new("Prelavador Fibras Pro", "Prelavadores")
                .with_variant(Variant::new("1 kg", "plfc1.5", Money::from_cents(25000))),
        ])
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let catalog = catalog();
        let index = LookupIndex::new(&catalog);

        let lower = index.find("plfc1.5", None).unwrap();
        let upper = index.find("PLFC1.5", None).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.product.name, "Prelavador Fibras");
    }

    #[test]
    fn test_find_first_in_catalog_order() {
        let catalog = catalog();
        let index = LookupIndex::new(&catalog);
        let m = index.find("Plfc1.5", None).unwrap();
        assert_eq!(m.variant.size, "1.5 kg");
    }

    #[test]
    fn test_find_with_size_is_exact() {
        let catalog = catalog();
        let index = LookupIndex::new(&catalog);

        let m = index.find("PLFC1.5", Some("1 kg")).unwrap();
        assert_eq!(m.product.name, "Prelavador Fibras Pro");

        assert!(index.find("PLFC1.5", Some("1 KG")).is_none());
        assert!(index.find("PLFC4", Some("1.5 kg")).is_none());
    }

    #[test]
    fn test_empty_size_means_any() {
        let catalog = catalog();
        let index = LookupIndex::new(&catalog);
        assert_eq!(index.find("plfc4", Some("")).unwrap().variant.code, "PLFC4");
    }

    #[test]
    fn test_unknown_code() {
        let catalog = catalog();
        let index = LookupIndex::new(&catalog);
        assert!(index.find("NOPE", None).is_none());
    }
}
