//! Domain types for the content player.
//!
//! This module contains the core data structures:
//! - Content: media types, categories, items, and keys
//! - Catalog: the nested lookup table of available content

pub mod catalog;
pub mod content;

// Re-export commonly used types
pub use catalog::Catalog;
pub use content::{Category, ContentItem, KeyError, MediaType, ResolutionKey, ResolvedContent};
