//! Listing query: text search, category selection and sort mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort modes for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortMode {
    /// Sort by name, Spanish collation.
    #[default]
    #[serde(rename = "nombre")]
    Name,
    /// Sort by first variant price, low to high.
    #[serde(rename = "precio_asc")]
    PriceAsc,
    /// Sort by first variant price, high to low.
    #[serde(rename = "precio_desc")]
    PriceDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Name, SortMode::PriceAsc, SortMode::PriceDesc];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Name => "nombre",
            SortMode::PriceAsc => "precio_asc",
            SortMode::PriceDesc => "precio_desc",
        }
    }

    /// Parse a sort mode. Accepts the Spanish wire names and English aliases.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "nombre" | "name" => Some(SortMode::Name),
            "precio_asc" | "price_asc" => Some(SortMode::PriceAsc),
            "precio_desc" | "price_desc" => Some(SortMode::PriceDesc),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Name => "Ordenar por nombre",
            SortMode::PriceAsc => "Precio: menor a mayor",
            SortMode::PriceDesc => "Precio: mayor a menor",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection for listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Exactly this category.
    Only(String),
}

impl CategoryFilter {
    /// Label shown for the "every category" entry.
    pub const ALL_LABEL: &'static str = "Todas";

    /// Parse a category selection. `all`, `Todas` and empty input select
    /// every category; anything else is an exact category name.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("all")
            || trimmed == Self::ALL_LABEL
        {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(trimmed.to_string())
        }
    }

    pub fn only(category: impl Into<String>) -> Self {
        CategoryFilter::Only(category.into())
    }

    /// Whether a product category passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(c) => c,
        }
    }
}

/// Listing inputs chosen by the shopper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Free text search.
    pub text: String,
    /// Category selection.
    pub category: CategoryFilter,
    /// Sort mode.
    pub sort: SortMode,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the category selection.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the sort mode.
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Normalized search needle: trimmed and lowercased, `None` when blank.
    pub fn needle(&self) -> Option<String> {
        let needle = self.text.trim().to_lowercase();
        (!needle.is_empty()).then_some(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!(SortMode::from_str("nombre"), Some(SortMode::Name));
        assert_eq!(SortMode::from_str("PRICE_DESC"), Some(SortMode::PriceDesc));
        assert_eq!(SortMode::from_str("rating"), None);
        assert_eq!(SortMode::default(), SortMode::Name);
    }

    #[test]
    fn test_sort_mode_wire_names() {
        assert_eq!(serde_json::to_string(&SortMode::PriceAsc).unwrap(), "\"precio_asc\"");
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::parse("Todas"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("  "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Pisos"),
            CategoryFilter::Only("Pisos".to_string())
        );
    }

    #[test]
    fn test_category_filter_is_exact() {
        let filter = CategoryFilter::only("Pisos");
        assert!(filter.matches("Pisos"));
        assert!(!filter.matches("pisos"));
        assert!(CategoryFilter::All.matches("anything"));
    }

    #[test]
    fn test_needle() {
        assert_eq!(CatalogQuery::new().with_text("  PLFC ").needle().as_deref(), Some("plfc"));
        assert_eq!(CatalogQuery::new().with_text("   ").needle(), None);
    }
}
