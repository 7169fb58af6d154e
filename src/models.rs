//! Menu Models
//!
//! Data structures for the built, per-locale menu catalog.

use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Uz,
    Ru,
    En,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::Uz, Lang::Ru, Lang::En];

    /// Tag used in storage and markup ("uz" / "ru" / "en").
    pub fn as_tag(&self) -> &'static str {
        match self {
            Lang::Uz => "uz",
            Lang::Ru => "ru",
            Lang::En => "en",
        }
    }

    /// Parse a stored tag. Unknown values return `None` so a corrupted
    /// preference falls back to the language gate instead of propagating.
    pub fn from_tag(tag: &str) -> Option<Lang> {
        match tag.trim() {
            "uz" => Some(Lang::Uz),
            "ru" => Some(Lang::Ru),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// Native-script label shown on the gate buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Lang::Uz => "O‘zbek",
            Lang::Ru => "Русский",
            Lang::En => "English",
        }
    }
}

/// A single dish in one locale's catalog.
///
/// `id` is stable across locales and is the join key for cross-locale
/// lookup (featured-dish resolution).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Price in UZS (whole sums, no fractional unit).
    pub price: u64,
    pub veg: bool,
    /// Empty means "not yet published"; the modal shows placeholder copy.
    pub ingredients: Vec<String>,
}

/// An ordered group of dishes. Item order is authorial, never sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_roundtrip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_tag(lang.as_tag()), Some(lang));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(Lang::from_tag("de"), None);
        assert_eq!(Lang::from_tag(""), None);
        assert_eq!(Lang::from_tag("ru-RU"), None);
    }

    #[test]
    fn tag_parsing_trims_whitespace() {
        assert_eq!(Lang::from_tag(" en "), Some(Lang::En));
    }
}
