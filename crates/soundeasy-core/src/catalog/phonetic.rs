//! Built-in English IPA inventory

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{CatalogError, ItemCatalog};
use crate::review::ItemId;

/// Vowel or consonant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Vowel,
    Consonant,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Vowel => "vowel",
            SymbolKind::Consonant => "consonant",
        }
    }
}

/// One phonetic symbol and its recording
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneticSymbol {
    pub symbol: String,
    pub audio_file: Option<String>,
}

/// A named group of symbols
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticCategory {
    pub key: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SymbolKind,
    pub symbols: Vec<PhoneticSymbol>,
}

// (key, title, kind, symbols)
type CategoryRow = (&'static str, &'static str, SymbolKind, &'static [&'static str]);

const ENGLISH_IPA: &[CategoryRow] = &[
    (
        "monophthongsShort",
        "Short monophthongs",
        SymbolKind::Vowel,
        &["ɪ", "e", "æ", "ʌ", "ɒ", "ʊ", "ə"],
    ),
    (
        "monophthongsLong",
        "Long monophthongs",
        SymbolKind::Vowel,
        &["iː", "ɜː", "ɑː", "ɔː", "uː"],
    ),
    (
        "diphthongs",
        "Diphthongs",
        SymbolKind::Vowel,
        &["eɪ", "aɪ", "ɔɪ", "aʊ", "əʊ", "ɪə", "eə", "ʊə"],
    ),
    (
        "plosives",
        "Plosives",
        SymbolKind::Consonant,
        &["p", "b", "t", "d", "k", "g"],
    ),
    ("nasals", "Nasals", SymbolKind::Consonant, &["m", "n", "ŋ"]),
    (
        "fricatives",
        "Fricatives",
        SymbolKind::Consonant,
        &["f", "v", "θ", "ð", "s", "z", "ʃ", "ʒ", "h"],
    ),
    (
        "affricates",
        "Affricates",
        SymbolKind::Consonant,
        &["tʃ", "dʒ", "ts", "dz"],
    ),
    ("semivowels", "Semivowels", SymbolKind::Consonant, &["w", "r", "j"]),
    ("laterals", "Laterals", SymbolKind::Consonant, &["l"]),
    (
        "combinations",
        "Consonant clusters",
        SymbolKind::Consonant,
        &["tr", "dr"],
    ),
];

/// Catalog of phonetic symbols grouped by category
///
/// Only symbols with a recording are reviewable.
#[derive(Debug, Clone)]
pub struct PhoneticCatalog {
    categories: Vec<PhoneticCategory>,
    // symbol -> (category index, symbol index)
    index: HashMap<String, (usize, usize)>,
}

impl PhoneticCatalog {
    /// The 48-symbol English inventory with `/audio/<kind>_<symbol>.mp3` recordings
    pub fn english() -> Self {
        let categories = ENGLISH_IPA
            .iter()
            .map(|(key, title, kind, symbols)| PhoneticCategory {
                key: key.to_string(),
                title: title.to_string(),
                kind: *kind,
                symbols: symbols
                    .iter()
                    .map(|s| PhoneticSymbol {
                        symbol: s.to_string(),
                        audio_file: Some(format!("/audio/{}_{}.mp3", kind.as_str(), s)),
                    })
                    .collect(),
            })
            .collect();
        Self::with_index(categories)
    }

    /// Build a catalog from custom categories
    pub fn from_categories(categories: Vec<PhoneticCategory>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for symbol in categories.iter().flat_map(|c| &c.symbols) {
            if !seen.insert(symbol.symbol.as_str()) {
                return Err(CatalogError::DuplicateItem(symbol.symbol.clone()));
            }
        }

        let catalog = Self::with_index(categories);
        if catalog.known_item_ids().is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    fn with_index(categories: Vec<PhoneticCategory>) -> Self {
        let mut index = HashMap::new();
        for (ci, category) in categories.iter().enumerate() {
            for (si, symbol) in category.symbols.iter().enumerate() {
                index.entry(symbol.symbol.clone()).or_insert((ci, si));
            }
        }
        Self { categories, index }
    }

    pub fn categories(&self) -> &[PhoneticCategory] {
        &self.categories
    }

    /// Symbol entry with its category
    pub fn lookup(&self, symbol: &str) -> Option<(&PhoneticCategory, &PhoneticSymbol)> {
        let &(ci, si) = self.index.get(symbol)?;
        let category = self.categories.get(ci)?;
        Some((category, category.symbols.get(si)?))
    }

    /// Vowel or consonant
    pub fn kind_of(&self, symbol: &str) -> Option<SymbolKind> {
        self.lookup(symbol).map(|(category, _)| category.kind)
    }
}

impl Default for PhoneticCatalog {
    fn default() -> Self {
        Self::english()
    }
}

impl ItemCatalog for PhoneticCatalog {
    fn known_item_ids(&self) -> Vec<ItemId> {
        self.categories
            .iter()
            .flat_map(|c| &c.symbols)
            .filter(|s| s.audio_file.is_some())
            .map(|s| s.symbol.clone())
            .collect()
    }

    fn audio_file(&self, item_id: &str) -> Option<&str> {
        self.lookup(item_id)
            .and_then(|(_, symbol)| symbol.audio_file.as_deref())
    }
}
