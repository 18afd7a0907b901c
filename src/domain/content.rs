//! Content types, categories, and the resolution key/result shapes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a free-form key field does not parse.
///
/// The resolver swallows these into a plain miss; they exist so callers
/// that want to know *why* a key was rejected can find out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("unknown media type: {0}")]
    UnknownMediaType(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("invalid content id: {0}")]
    InvalidId(String),
}

/// Kind of playable media.
///
/// `Audio` is reserved in the catalog schema but has no player yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Video,
    Audio,
}

impl MediaType {
    /// Wire string used in catalog keys and CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Video => "video",
            MediaType::Audio => "audio",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MediaType {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, KeyError> {
        match s {
            "video" => Ok(MediaType::Video),
            "audio" => Ok(MediaType::Audio),
            other => Err(KeyError::UnknownMediaType(other.to_string())),
        }
    }
}

/// Content category within a media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "energy")]
    Energy,
    #[serde(rename = "deescalation")]
    Deescalation,
    #[serde(rename = "oh-shit")]
    OhShit,
}

impl Category {
    /// Wire string used in catalog keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Energy => "energy",
            Category::Deescalation => "deescalation",
            Category::OhShit => "oh-shit",
        }
    }

    /// All known categories, in catalog order.
    pub fn all() -> [Category; 3] {
        [Category::Energy, Category::Deescalation, Category::OhShit]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, KeyError> {
        match s {
            "energy" => Ok(Category::Energy),
            "deescalation" => Ok(Category::Deescalation),
            "oh-shit" => Ok(Category::OhShit),
            other => Err(KeyError::UnknownCategory(other.to_string())),
        }
    }
}

/// A single playable entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Human-readable title, used as the accessible label.
    pub title: String,

    /// Absolute source URL of the media.
    pub url: String,

    /// Absolute URL of the preview image.
    pub thumbnail: String,
}

/// The free-form request key: type, category, and index as they arrive
/// from routing or the command line. Any field may be absent or garbage;
/// that is legal input, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionKey {
    pub media_type: Option<String>,
    pub category: Option<String>,
    pub id: Option<String>,
}

impl ResolutionKey {
    pub fn new(
        media_type: impl Into<String>,
        category: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            media_type: Some(media_type.into()),
            category: Some(category.into()),
            id: Some(id.into()),
        }
    }

    /// Parse the media type field, if present and well-formed.
    pub fn parse_media_type(&self) -> Result<MediaType, KeyError> {
        match &self.media_type {
            Some(s) => s.parse(),
            None => Err(KeyError::UnknownMediaType("<missing>".to_string())),
        }
    }

    /// Parse the category field, if present and well-formed.
    pub fn parse_category(&self) -> Result<Category, KeyError> {
        match &self.category {
            Some(s) => s.parse(),
            None => Err(KeyError::UnknownCategory("<missing>".to_string())),
        }
    }

    /// Parse the id field as a 0-based index.
    ///
    /// An id matches only when the raw string parses cleanly as base-10
    /// `usize`, so `"0"` is valid and `"-1"`, `"1.5"`, `""` are not.
    pub fn parse_id(&self) -> Result<usize, KeyError> {
        match &self.id {
            Some(s) => s
                .parse::<usize>()
                .map_err(|_| KeyError::InvalidId(s.clone())),
            None => Err(KeyError::InvalidId("<missing>".to_string())),
        }
    }
}

/// A catalog item joined with its originating media type.
///
/// Produced fresh per resolve call; exactly these four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedContent {
    pub media_type: MediaType,
    pub title: String,
    pub url: String,
    pub thumbnail: String,
}

impl ResolvedContent {
    /// Join a stored item with the media type it was found under.
    pub fn from_item(media_type: MediaType, item: &ContentItem) -> Self {
        Self {
            media_type,
            title: item.title.clone(),
            url: item.url.clone(),
            thumbnail: item.thumbnail.clone(),
        }
    }
}
