//! Storefront configuration.
//!
//! Everything the page shows besides the product list: where the catalog
//! lives, WhatsApp contacts, the category palette, combos and guides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::CategoryPalette;
use crate::checkout::Contact;
use crate::combo::{Combo, ComboItem};
use crate::error::StorefrontError;
use crate::guide::{Guide, GuideStep};

/// File names searched for by [`StorefrontConfig::find`], in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Catalog source.
    pub catalog: CatalogConfig,

    /// WhatsApp contacts; the first one receives quotes by default.
    pub contacts: Vec<Contact>,

    /// Category tones and short labels.
    pub palette: CategoryPalette,

    /// Recommended combos.
    pub combos: Vec<Combo>,

    /// Washing guides.
    pub guides: Vec<Guide>,
}

/// Where the product list is read from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Path to the catalog JSON, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    ///
    /// A relative catalog path is resolved against the config file's
    /// directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorefrontError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StorefrontError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str::<Self>(&content).map_err(|e| StorefrontError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            Self::from_toml(&content).map_err(|e| match e {
                StorefrontError::ConfigParse { message, .. } => StorefrontError::ConfigParse {
                    path: path.to_path_buf(),
                    message,
                },
                other => other,
            })?
        };

        if let (Some(catalog), Some(dir)) = (&config.catalog.path, path.parent()) {
            if catalog.is_relative() {
                config.catalog.path = Some(dir.join(catalog));
            }
        }

        tracing::debug!(path = %path.display(), combos = config.combos.len(), "config loaded");
        Ok(config)
    }

    /// Parse TOML config text.
    pub fn from_toml(content: &str) -> Result<Self, StorefrontError> {
        toml::from_str(content).map_err(|e| StorefrontError::ConfigParse {
            path: PathBuf::new(),
            message: e.to_string(),
        })
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, StorefrontError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write config to a file, TOML or JSON by extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StorefrontError> {
        let path = path.as_ref();
        let content = if path.extension().is_some_and(|e| e == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| StorefrontError::Serialization(e.to_string()))?
        } else {
            self.to_toml()?
        };

        std::fs::write(path, content).map_err(|source| StorefrontError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find a config file in `start` or its ancestors.
    pub fn find(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
        })
    }

    /// Contact at `index`, falling back to the first contact.
    pub fn contact(&self, index: Option<usize>) -> Option<&Contact> {
        match index {
            Some(i) => self.contacts.get(i),
            None => self.contacts.first(),
        }
    }

    /// Find a combo by id.
    pub fn combo(&self, id: &str) -> Option<&Combo> {
        self.combos.iter().find(|c| c.id == id)
    }

    /// Find a guide by id.
    pub fn guide(&self, id: &str) -> Option<&Guide> {
        self.guides.iter().find(|g| g.id == id)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        let palette = CategoryPalette::default();
        let tone = |category: &str| palette.tone(category).to_string();

        let combos = vec![
            Combo {
                id: "combo-basico-upholstery".to_string(),
                name: "Básico Tapicería".to_string(),
                description: "Ruta rápida: Prelavador + Aditivo + Enjuague.".to_string(),
                tone: tone("Prelavadores"),
                items: vec![
                    ComboItem::new("PLFC1.5", "1.5 kg", 1),
                    ComboItem::new("ABS2", "2 kg", 1),
                    ComboItem::new("EMLF1", "1 L", 1),
                ],
            },
            Combo {
                id: "combo-antiolores".to_string(),
                name: "Elimina Olores".to_string(),
                description: "Prelavador + Mata olores + Enjuague neutro.".to_string(),
                tone: tone("Control de olores"),
                items: vec![
                    ComboItem::new("PLLL1", "1 L", 1),
                    ComboItem::new("COME1", "1 L", 1),
                    ComboItem::new("EMLF1", "1 L", 1),
                ],
            },
            Combo {
                id: "combo-auto-interiores-oz".to_string(),
                name: "Auto Interiores & Plásticos (OZ)".to_string(),
                description: "Limpieza neutra de interiores + restauración de plásticos."
                    .to_string(),
                tone: tone("Automotriz"),
                items: vec![
                    ComboItem::new("APCN1", "1 L", 1),
                    ComboItem::new("NAR150g", "150 g", 1),
                    ComboItem::new("SC1", "1 kg", 1),
                ],
            },
        ];

        let guides = vec![
            Guide {
                id: "ruta-profesional".to_string(),
                title: "Lavado profesional (tapicería)".to_string(),
                steps: vec![
                    GuideStep::new("1. Prelavador", "Prelavadores"),
                    GuideStep::new("2. + Aditivo (opcional)", "Aditivos"),
                    GuideStep::new("3. Desmanchadores (si aplica)", "Desmanchadores"),
                    GuideStep::new("4. Mata olores", "Control de olores"),
                    GuideStep::new("5. Enjuague multifibras", "Enjuagues"),
                    GuideStep::new("6. Protección (Repel / Apply Wet)", "Protectores de tela"),
                ],
            },
            Guide {
                id: "ruta-ph-neutro".to_string(),
                title: "Lavado pH neutro (muebles / delicados)".to_string(),
                steps: vec![
                    GuideStep::new("1. Prelavador neutro", "Prelavadores"),
                    GuideStep::new("2. Desmanchador Directo", "Desmanchadores"),
                    GuideStep::new("3. Enjuague neutro", "Enjuagues"),
                    GuideStep::new("4. Shampoo neutro", "Shampoos"),
                    GuideStep::new("5. Protección", "Protectores de tela"),
                ],
            },
        ];

        Self {
            catalog: CatalogConfig::default(),
            contacts: vec![
                Contact::whatsapp_mx("3313620333"),
                Contact::whatsapp_mx("3327606138"),
            ],
            palette,
            combos,
            guides,
        }
    }
}

/// Generate a default storefront.toml.
pub fn generate_default_config(catalog_path: &str) -> Result<String, StorefrontError> {
    let mut config = StorefrontConfig::default();
    config.catalog.path = Some(PathBuf::from(catalog_path));
    Ok(format!("# Storefront configuration\n\n{}", config.to_toml()?))
}
