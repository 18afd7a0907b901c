//! The content catalog: a nested, immutable lookup table.
//!
//! Keyed by media type, then category, holding ordered sequences of
//! items. Missing nesting levels and empty sequences are both legal and
//! behave as empty lookups.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::content::{Category, ContentItem, MediaType};

/// Catalog of all available content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<MediaType, HashMap<Category, Vec<ContentItem>>>,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item under a media type and category, creating the
    /// nesting levels as needed.
    pub fn insert(&mut self, media_type: MediaType, category: Category, item: ContentItem) {
        self.entries
            .entry(media_type)
            .or_default()
            .entry(category)
            .or_default()
            .push(item);
    }

    /// Whether the catalog has an entry for this media type at all.
    pub fn has_media_type(&self, media_type: MediaType) -> bool {
        self.entries.contains_key(&media_type)
    }

    /// The sequence stored under a media type and category, if both
    /// nesting levels are present.
    pub fn items(&self, media_type: MediaType, category: Category) -> Option<&[ContentItem]> {
        self.entries
            .get(&media_type)?
            .get(&category)
            .map(Vec::as_slice)
    }

    /// Look up a single item by position.
    pub fn get(
        &self,
        media_type: MediaType,
        category: Category,
        index: usize,
    ) -> Option<&ContentItem> {
        self.items(media_type, category)?.get(index)
    }

    /// Total number of items across all types and categories.
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .flat_map(|categories| categories.values())
            .map(Vec::len)
            .sum()
    }

    /// Check if the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
