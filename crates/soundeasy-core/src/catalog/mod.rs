//! Item catalog - the set of learnable items
//!
//! The scheduler only sees opaque ids. A catalog tells the session which ids
//! exist and where each item's audio lives.

mod phonetic;

pub use phonetic::{PhoneticCatalog, PhoneticCategory, PhoneticSymbol, SymbolKind};

use crate::review::ItemId;

/// Catalog errors
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No reviewable items
    #[error("Catalog has no reviewable items")]
    Empty,
    /// The same id appears twice
    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),
}

/// Provider of known item ids
///
/// Ids are unique and stay the same for the whole session.
pub trait ItemCatalog {
    /// Every reviewable id, in catalog order
    fn known_item_ids(&self) -> Vec<ItemId>;

    /// Audio resource for an item, `None` if it has none
    fn audio_file(&self, item_id: &str) -> Option<&str>;
}

impl<T: ItemCatalog + ?Sized> ItemCatalog for &T {
    fn known_item_ids(&self) -> Vec<ItemId> {
        (**self).known_item_ids()
    }

    fn audio_file(&self, item_id: &str) -> Option<&str> {
        (**self).audio_file(item_id)
    }
}
