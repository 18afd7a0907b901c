//! yffr-player - Content resolution and player dispatch
//!
//! The resolution-and-dispatch core of a media-playback widget: a key
//! of (type, category, id) is looked up in a static content catalog and
//! the matching player renders, or a graceful not-found surface when
//! nothing matches.
//!
//! # Architecture
//!
//! - Resolution is a pure function over an injected, immutable catalog;
//!   any malformed or unknown key part is a miss, never a fault
//! - Dispatch pattern-matches the resolved media type into an explicit
//!   view state machine (Video, Audio, Unknown, NotFound)
//! - All I/O (catalog loading) happens in adapters before the first
//!   resolve; the core is synchronous and side-effect free
//!
//! # Modules
//!
//! - `adapters`: Collaborators (catalog sources, YouTube embed, branding)
//! - `core`: Resolver, dispatcher state machine, container
//! - `domain`: Data structures (MediaType, Category, Catalog, keys)
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Render the widget for a request key
//! yffr-player play video energy 0
//!
//! # Inspect what a key resolves to
//! yffr-player resolve video oh-shit 1 --json
//!
//! # Browse the catalog
//! yffr-player list --media-type video
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;

// Re-export main types at crate root for convenience
pub use crate::core::{ContentPlayer, PlayerView, Resolver};
pub use domain::{Catalog, Category, ContentItem, MediaType, ResolutionKey, ResolvedContent};
