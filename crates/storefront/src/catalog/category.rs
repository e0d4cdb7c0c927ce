//! Category presentation data.
//!
//! Categories are plain strings on products. The palette maps them to a
//! corporate tone and to a short label for compact category pickers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tone used for categories missing from the palette.
pub const DEFAULT_TONE: &str = "#1eae93";

/// Tone used by the category picker for unknown categories (including the
/// "all" entry).
pub const STORY_TONE: &str = "#CBD5E1";

const DARK_TEXT: &str = "#0f172a";
const LIGHT_TEXT: &str = "#ffffff";

/// Category to tone and short-label tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CategoryPalette {
    /// Tone for categories without an entry in `tones`.
    pub fallback_tone: String,
    /// Picker tone for categories without an entry in `tones`.
    pub story_tone: String,
    /// Hex tone per category.
    pub tones: BTreeMap<String, String>,
    /// Short label per category.
    pub labels: BTreeMap<String, String>,
}

impl CategoryPalette {
    /// An empty palette: every category uses the fallback tone and its own
    /// name as label.
    pub fn empty() -> Self {
        Self {
            fallback_tone: DEFAULT_TONE.to_string(),
            story_tone: STORY_TONE.to_string(),
            tones: BTreeMap::new(),
            labels: BTreeMap::new(),
        }
    }

    /// Tone of a category for cards, badges and section headers.
    pub fn tone(&self, category: &str) -> &str {
        self.tones
            .get(category)
            .map(String::as_str)
            .unwrap_or(self.fallback_tone.as_str())
    }

    /// Tone of a category in the picker strip.
    pub fn story_tone(&self, category: &str) -> &str {
        self.tones
            .get(category)
            .map(String::as_str)
            .unwrap_or(self.story_tone.as_str())
    }

    /// Short label for a category, or the category itself.
    pub fn label<'a>(&'a self, category: &'a str) -> &'a str {
        self.labels
            .get(category)
            .map(String::as_str)
            .unwrap_or(category)
    }

    /// Text color readable on top of a tone.
    pub fn text_on(tone: &str) -> &'static str {
        match tone_rgb(tone) {
            Some((r, g, b)) => {
                let lum = 0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b);
                if lum > 0.5 {
                    DARK_TEXT
                } else {
                    LIGHT_TEXT
                }
            }
            None => LIGHT_TEXT,
        }
    }
}

impl Default for CategoryPalette {
    fn default() -> Self {
        let tones = [
            ("Prelavadores", "#EFB81C"),
            ("Enjuagues", "#747474"),
            ("Desmanchadores", "#5FA154"),
            ("All Purpose / Multiusos", "#8E5FA8"),
            ("Aditivos", "#7C3AED"),
            ("Control de olores", "#E7C736"),
            ("Pisos", "#E9A6AD"),
            ("Shampoos", "#0083C4"),
            ("Desinfectantes", "#E57E26"),
            ("Complementos", "#93B7D6"),
            ("Protectores de tela", "#69B5A6"),
            ("Piel y Vinilo", "#754222"),
            ("Automotriz", "#2E2C79"),
        ];
        let labels = [
            ("All Purpose / Multiusos", "APC"),
            ("Protectores de tela", "Protectores"),
            ("Control de olores", "Olores"),
            ("Piel y Vinilo", "Piel/Vinilo"),
            ("Desinfectantes", "Desinfect."),
            ("Automotriz", "Auto"),
        ];

        Self {
            tones: tones
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            labels: labels
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Self::empty()
        }
    }
}

/// Parse a `#rgb` or `#rrggbb` tone into its channels.
pub fn tone_rgb(tone: &str) -> Option<(u8, u8, u8)> {
    let hex = tone.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let value = u32::from_str_radix(&expanded, 16).ok()?;
    Some(((value >> 16) as u8, (value >> 8) as u8, value as u8))
}

/// sRGB channel to linear light.
fn channel(c: u8) -> f64 {
    let x = f64::from(c) / 255.0;
    if x <= 0.03928 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_lookup_and_fallback() {
        let palette = CategoryPalette::default();
        assert_eq!(palette.tone("Shampoos"), "#0083C4");
        assert_eq!(palette.tone("Sin categoría"), DEFAULT_TONE);
        assert_eq!(palette.story_tone("Sin categoría"), STORY_TONE);
    }

    #[test]
    fn test_short_labels() {
        let palette = CategoryPalette::default();
        assert_eq!(palette.label("All Purpose / Multiusos"), "APC");
        assert_eq!(palette.label("Pisos"), "Pisos");
    }

    #[test]
    fn test_text_on() {
        assert_eq!(CategoryPalette::text_on("#ffffff"), DARK_TEXT);
        assert_eq!(CategoryPalette::text_on("#fff"), DARK_TEXT);
        assert_eq!(CategoryPalette::text_on("#2E2C79"), LIGHT_TEXT);
        assert_eq!(CategoryPalette::text_on("not-a-color"), LIGHT_TEXT);
    }

    #[test]
    fn test_tone_rgb() {
        assert_eq!(tone_rgb("#EFB81C"), Some((0xEF, 0xB8, 0x1C)));
        assert_eq!(tone_rgb("#abc"), Some((0xAA, 0xBB, 0xCC)));
        assert_eq!(tone_rgb("#12345"), None);
        assert_eq!(tone_rgb("#zzzzzz"), None);
    }

    #[test]
    fn test_empty_palette_uses_names() {
        let palette = CategoryPalette::empty();
        assert_eq!(palette.tone("Automotriz"), DEFAULT_TONE);
        assert_eq!(palette.label("Automotriz"), "Automotriz");
    }
}
