//! The content player container: branding, resolution, dispatch.

use crate::adapters::branding;
use crate::core::{dispatcher::PlayerView, resolver::Resolver};
use crate::domain::{Catalog, ResolutionKey, ResolvedContent};

/// CSS class on the widget root.
pub const PLAYER_CLASS: &str = "content-player";

/// Composes the full widget for one request key.
///
/// Output is a pure function of the key and the injected catalog; the
/// container keeps no mutable state between renders.
#[derive(Debug, Clone)]
pub struct ContentPlayer {
    resolver: Resolver,
}

impl ContentPlayer {
    /// Build a player over a fully loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            resolver: Resolver::new(catalog),
        }
    }

    /// Resolve a key without rendering.
    pub fn resolve(&self, key: &ResolutionKey) -> Option<ResolvedContent> {
        self.resolver.resolve(key)
    }

    /// Render the widget: the branding block always, then either the
    /// dispatched player or the not-found surface.
    pub fn render(&self, key: &ResolutionKey) -> String {
        let view = PlayerView::from_resolution(self.resolver.resolve(key));

        format!(
            "<div class=\"{}\">\n{}\n{}\n</div>",
            PLAYER_CLASS,
            branding::render(),
            view.render()
        )
    }
}
