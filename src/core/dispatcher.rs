//! Player dispatch: from resolution outcome to a rendered surface.
//!
//! Every view is terminal for a render pass. There is no retry or
//! re-resolution once a view has been selected.

use crate::adapters::youtube;
use crate::domain::{MediaType, ResolvedContent};

/// Base CSS class on the dispatcher subtree root.
pub const VIEW_CLASS: &str = "content-to-view";

/// CSS class on the not-found surface root.
pub const NOT_FOUND_CLASS: &str = "content-not-found";

/// The player selected for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerView {
    /// Embedded video player bound to the resolved item.
    Video(ResolvedContent),

    /// Reserved: the catalog schema carries an `audio` type, but no
    /// player exists for it. Renders the not-found surface until a
    /// product decision lands.
    Audio(ResolvedContent),

    /// A resolved media type with no player mapping. Unreachable while
    /// `MediaType` has players or reservations for every variant; kept
    /// as an explicit fall-through rather than an implicit default.
    Unknown(ResolvedContent),

    /// Nothing resolved; static fallback surface.
    NotFound,
}

impl PlayerView {
    /// Select a view purely from the resolution outcome.
    pub fn from_resolution(resolved: Option<ResolvedContent>) -> Self {
        match resolved {
            None => PlayerView::NotFound,
            Some(content) => match content.media_type {
                MediaType::Video => PlayerView::Video(content),
                MediaType::Audio => PlayerView::Audio(content),
            },
        }
    }

    /// The resolved content behind this view, when there is one.
    pub fn content(&self) -> Option<&ResolvedContent> {
        match self {
            PlayerView::Video(c) | PlayerView::Audio(c) | PlayerView::Unknown(c) => Some(c),
            PlayerView::NotFound => None,
        }
    }

    /// Render the view as an HTML fragment.
    ///
    /// Only `Video` has a real player today; `Audio` and `Unknown`
    /// degrade to the same surface as `NotFound`.
    pub fn render(&self) -> String {
        match self {
            PlayerView::Video(content) => {
                let player = youtube::embed(&content.url, &content.thumbnail, &content.title);
                format!(
                    "<div class=\"{} {}\">\n{}\n</div>",
                    VIEW_CLASS,
                    content.media_type.as_str(),
                    player
                )
            }
            PlayerView::Audio(_) | PlayerView::Unknown(_) | PlayerView::NotFound => {
                render_not_found()
            }
        }
    }
}

/// The static, non-interactive "content not found" surface.
pub fn render_not_found() -> String {
    format!("<div class=\"{NOT_FOUND_CLASS}\"><p>Content not found</p></div>")
}
