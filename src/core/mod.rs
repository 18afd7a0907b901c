//! Core resolution and dispatch logic.
//!
//! This module contains:
//! - Resolver: pure (type, category, id) lookup against the catalog
//! - Dispatcher: the PlayerView state machine and its rendering
//! - Player: the container composing branding, resolver, and dispatcher

pub mod dispatcher;
pub mod player;
pub mod resolver;

// Re-export commonly used types
pub use dispatcher::{render_not_found, PlayerView, NOT_FOUND_CLASS, VIEW_CLASS};
pub use player::{ContentPlayer, PLAYER_CLASS};
pub use resolver::Resolver;
