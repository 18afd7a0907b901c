//! Collaborator interfaces around the core.
//!
//! The core never does I/O and never speaks a player protocol; these
//! modules hold everything it delegates: catalog loading, the embedded
//! player markup, and the branding block.

pub mod branding;
pub mod sources;
pub mod youtube;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::Catalog;

// Re-export the concrete sources
pub use sources::{BundledSource, JsonFileSource};

/// A provider that can materialize the full catalog before resolution
/// starts.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable source name.
    fn name(&self) -> &str;

    /// Load the complete catalog.
    async fn load(&self) -> Result<Catalog>;
}

/// Escape a string for use inside a double-quoted HTML attribute.
pub(crate) fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
