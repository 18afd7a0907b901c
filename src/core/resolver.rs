//! Pure catalog lookup.

use crate::domain::{Catalog, ResolutionKey, ResolvedContent};

/// Resolves free-form keys against an injected catalog.
///
/// The catalog is passed once at construction so callers can reuse one
/// resolver across many keys, and tests can swap in their own catalog.
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Catalog,
}

impl Resolver {
    /// Create a resolver over a fully materialized catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this resolver reads from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Map a key to a content item, or `None` when any part of the key
    /// fails validation.
    ///
    /// Checks in order: the media type parses and is present in the
    /// catalog, the category parses and is present under that type, and
    /// the id is an in-range 0-based index. Absence is a miss, never an
    /// error; the function is pure and never logs.
    pub fn resolve(&self, key: &ResolutionKey) -> Option<ResolvedContent> {
        let media_type = key.parse_media_type().ok()?;
        if !self.catalog.has_media_type(media_type) {
            return None;
        }

        let category = key.parse_category().ok()?;
        let items = self.catalog.items(media_type, category)?;

        let index = key.parse_id().ok()?;
        let item = items.get(index)?;

        Some(ResolvedContent::from_item(media_type, item))
    }
}
