//! Product and variant types.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are keyed by `name`; the catalog never holds two products with
/// the same name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product name.
    pub name: String,
    /// Category the product is listed under.
    #[serde(default)]
    pub category: String,
    /// Short line shown under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Color/texture description of the product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    /// Free-form usage notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Product-level image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Purchasable presentations, in display order.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Create a product with no variants.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            subtitle: None,
            appearance: None,
            notes: None,
            image: None,
            variants: Vec::new(),
        }
    }

    /// Append a variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_appearance(mut self, appearance: impl Into<String>) -> Self {
        self.appearance = Some(appearance.into());
        self
    }

    /// Price of the first variant, or zero for a product without variants.
    ///
    /// This is the price used when sorting listings.
    pub fn first_price(&self) -> Money {
        self.variants.first().map(|v| v.price).unwrap_or_default()
    }

    /// Image for the product card: the product image, else the first
    /// variant that has one.
    pub fn display_image(&self) -> Option<&str> {
        self.image
            .as_deref()
            .or_else(|| self.variants.iter().find_map(|v| v.image.as_deref()))
    }

    /// Find a variant of this product by code (case-insensitive).
    pub fn variant(&self, code: &str) -> Option<&Variant> {
        let needle = code.to_lowercase();
        self.variants.iter().find(|v| v.code.to_lowercase() == needle)
    }

    /// Lowercased text searched by the listing query.
    pub(crate) fn search_haystack(&self) -> String {
        let mut parts: Vec<&str> = vec![
            self.name.as_str(),
            self.subtitle.as_deref().unwrap_or(""),
            self.category.as_str(),
            self.appearance.as_deref().unwrap_or(""),
        ];
        parts.extend(self.variants.iter().map(|v| v.code.as_str()));
        parts.join(" ").to_lowercase()
    }
}

/// A purchasable size/packaging of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Presentation, e.g. "1 L" or "1.5 kg".
    #[serde(default)]
    pub size: String,
    /// Product code, unique within the product.
    #[serde(default)]
    pub code: String,
    /// Public price in pesos.
    #[serde(default)]
    pub price: Money,
    /// Variant image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Marketplace listings for this variant.
    #[serde(default, skip_serializing_if = "Channels::is_empty")]
    pub channels: Channels,
}

impl Variant {
    /// Create a new variant.
    pub fn new(size: impl Into<String>, code: impl Into<String>, price: Money) -> Self {
        Self {
            size: size.into(),
            code: code.into(),
            price,
            image: None,
            channels: Channels::default(),
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }
}

/// Marketplace where a variant is also listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesChannel {
    MercadoLibre,
    Amazon,
    TikTok,
}

impl SalesChannel {
    pub fn label(&self) -> &'static str {
        match self {
            SalesChannel::MercadoLibre => "Mercado Libre",
            SalesChannel::Amazon => "Amazon",
            SalesChannel::TikTok => "TikTok",
        }
    }
}

/// Marketplace links of a variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ml: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amz: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tt: Option<String>,
}

impl Channels {
    pub fn is_empty(&self) -> bool {
        self.ml.is_none() && self.amz.is_none() && self.tt.is_none()
    }

    /// Present links in display order (Mercado Libre, Amazon, TikTok).
    pub fn links(&self) -> Vec<(SalesChannel, &str)> {
        [
            (SalesChannel::MercadoLibre, self.ml.as_deref()),
            (SalesChannel::Amazon, self.amz.as_deref()),
            (SalesChannel::TikTok, self.tt.as_deref()),
        ]
        .into_iter()
        .filter_map(|(channel, href)| href.filter(|h| !h.is_empty()).map(|h| (channel, h)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_json() {
        let product: Product = serde_json::from_str(
            r#"{
                "name": "Prelavador Fibras",
                "category": "Prelavadores",
                "variants": [
                    {"size": "1.5 kg", "code": "PLFC1.5", "price": 320,
                     "channels": {"ml": "https://example.com/ml"}},
                    {"size": "4 kg", "code": "PLFC4", "price": "n/a"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(product.variants.len(), 2);
        assert_eq!(product.first_price().cents(), 32000);
        assert!(product.variants[1].price.is_zero());
        assert!(product.subtitle.is_none());
    }

    #[test]
    fn test_first_price_without_variants() {
        let product = Product::new("Sin presentaciones", "Complementos");
        assert!(product.first_price().is_zero());
    }

    #[test]
    fn test_display_image_fallback() {
        let product = Product::new("Shampoo", "Shampoos")
            .with_variant(Variant::new("1 L", "SH1", Money::from_cents(100)))
            .with_variant(
                Variant::new("4 L", "SH4", Money::from_cents(300)).with_image("https://img/sh4.png"),
            );
        assert_eq!(product.display_image(), Some("https://img/sh4.png"));

        let mut with_own = product.clone();
        with_own.image = Some("https://img/sh.png".to_string());
        assert_eq!(with_own.display_image(), Some("https://img/sh.png"));
    }

    #[test]
    fn test_variant_by_code_ignores_case() {
        let product = Product::new("Enjuague", "Enjuagues")
            .with_variant(Variant::new("1 L", "EMLF1", Money::from_cents(100)));
        assert!(product.variant("emlf1").is_some());
        assert!(product.variant("EMLF4").is_none());
    }

    #[test]
    fn test_search_haystack() {
        let product = Product::new("Mata Olores", "Control de olores")
            .with_subtitle("Encapsulador")
            .with_variant(Variant::new("1 L", "COME1", Money::ZERO));
        assert_eq!(
            product.search_haystack(),
            "mata olores encapsulador control de olores  come1"
        );
    }

    #[test]
    fn test_channel_links_order() {
        let channels = Channels {
            ml: None,
            amz: Some("https://amz".to_string()),
            tt: Some("https://tt".to_string()),
        };
        let links = channels.links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].0, SalesChannel::Amazon);
        assert_eq!(links[1].0.label(), "TikTok");
    }
}
