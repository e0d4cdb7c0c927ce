//! Product catalog module.
//!
//! The catalog is loaded once and never mutated afterwards. It contains the
//! product and variant types, the code lookup index and the category palette.

mod category;
mod lookup;
mod product;

pub use category::{tone_rgb, CategoryPalette, DEFAULT_TONE, STORY_TONE};
pub use lookup::{LookupIndex, VariantMatch};
pub use product::{Channels, Product, SalesChannel, Variant};

use std::path::Path;

use crate::error::StorefrontError;

/// Ordered, read-only product list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products in display order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, StorefrontError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    /// Load a catalog JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorefrontError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StorefrontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Find a product by exact name.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.products.iter().map(|p| p.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    /// Build a code lookup index over this catalog.
    pub fn lookup(&self) -> LookupIndex<'_> {
        LookupIndex::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"name": "Shampoo Neutro", "category": "Shampoos",
         "variants": [{"size": "1 L", "code": "SHN1", "price": 150}]},
        {"name": "Enjuague", "category": "Enjuagues",
         "variants": [{"size": "1 L", "code": "EMLF1", "price": 180}]},
        {"name": "Shampoo Alcalino", "category": "Shampoos"}
    ]"#;

    #[test]
    fn test_from_json_keeps_order() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.products()[0].name, "Shampoo Neutro");
        assert!(catalog.products()[2].variants.is_empty());
    }

    #[test]
    fn test_categories_are_distinct_and_sorted() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.categories(), vec!["Enjuagues", "Shampoos"]);
    }

    #[test]
    fn test_product_by_name() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert!(catalog.product("Enjuague").is_some());
        assert!(catalog.product("enjuague").is_none());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(StorefrontError::CatalogParse(_))
        ));
    }
}
