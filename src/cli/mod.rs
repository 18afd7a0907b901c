//! Command-line interface for the content player.
//!
//! Provides commands for rendering the widget, resolving keys,
//! listing the catalog, and inspecting configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::adapters::{BundledSource, CatalogSource, JsonFileSource};
use crate::config;
use crate::core::ContentPlayer;
use crate::domain::{Catalog, Category, MediaType, ResolutionKey};

/// yffr-player - content resolution and player dispatch
#[derive(Parser, Debug)]
#[command(name = "yffr-player")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog JSON file (overrides YFFR_CATALOG and the config file)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the full widget HTML for a request key
    Play {
        /// Media type (free-form; unknown values render not-found)
        media_type: String,

        /// Category (free-form)
        category: String,

        /// 0-based index into the category (free-form)
        id: String,
    },

    /// Resolve a key and print the matching content, if any
    Resolve {
        /// Media type (free-form)
        media_type: String,

        /// Category (free-form)
        category: String,

        /// 0-based index into the category (free-form)
        id: String,

        /// Print the resolved content as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalog entries with their indices
    List {
        /// Filter by media type
        #[arg(short, long, value_enum)]
        media_type: Option<MediaTypeArg>,

        /// Filter by category
        #[arg(short = 'C', long, value_enum)]
        category: Option<CategoryArg>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Media type for CLI filters (maps to MediaType)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MediaTypeArg {
    Video,
    Audio,
}

impl From<MediaTypeArg> for MediaType {
    fn from(t: MediaTypeArg) -> Self {
        match t {
            MediaTypeArg::Video => MediaType::Video,
            MediaTypeArg::Audio => MediaType::Audio,
        }
    }
}

/// Category for CLI filters (maps to Category)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Energy,
    Deescalation,
    OhShit,
}

impl From<CategoryArg> for Category {
    fn from(c: CategoryArg) -> Self {
        match c {
            CategoryArg::Energy => Category::Energy,
            CategoryArg::Deescalation => Category::Deescalation,
            CategoryArg::OhShit => Category::OhShit,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let Cli {
            catalog: catalog_flag,
            command,
        } = self;

        match command {
            Commands::Play {
                media_type,
                category,
                id,
            } => {
                let catalog = load_catalog(catalog_flag).await?;
                play(catalog, ResolutionKey::new(media_type, category, id))
            }
            Commands::Resolve {
                media_type,
                category,
                id,
                json,
            } => {
                let catalog = load_catalog(catalog_flag).await?;
                resolve(catalog, ResolutionKey::new(media_type, category, id), json)
            }
            Commands::List {
                media_type,
                category,
            } => {
                let catalog = load_catalog(catalog_flag).await?;
                list(catalog, media_type.map(Into::into), category.map(Into::into))
            }
            Commands::Config => show_config(),
        }
    }
}

/// Load the catalog from the highest-priority configured source
async fn load_catalog(flag: Option<PathBuf>) -> Result<Catalog> {
    if let Some(path) = flag {
        return JsonFileSource::new(path).load().await;
    }

    match &config::config()?.catalog {
        Some(path) => JsonFileSource::new(path).load().await,
        None => BundledSource.load().await,
    }
}

/// Render the widget for one key
fn play(catalog: Catalog, key: ResolutionKey) -> Result<()> {
    let player = ContentPlayer::new(catalog);
    println!("{}", player.render(&key));
    Ok(())
}

/// Resolve a key and print the outcome. A miss is expected behavior,
/// not an error, so it reports and exits cleanly.
fn resolve(catalog: Catalog, key: ResolutionKey, json: bool) -> Result<()> {
    let player = ContentPlayer::new(catalog);

    match player.resolve(&key) {
        Some(content) if json => {
            println!("{}", serde_json::to_string_pretty(&content)?);
        }
        Some(content) => {
            println!("Type: {}", content.media_type);
            println!("Title: {}", content.title);
            println!("URL: {}", content.url);
            println!("Thumbnail: {}", content.thumbnail);
        }
        None => {
            debug!(?key, "no catalog entry for key");
            println!("Content not found");
        }
    }

    Ok(())
}

/// List catalog entries, optionally filtered
fn list(
    catalog: Catalog,
    media_type: Option<MediaType>,
    category: Option<Category>,
) -> Result<()> {
    let types = match media_type {
        Some(t) => vec![t],
        None => vec![MediaType::Video, MediaType::Audio],
    };
    let categories = match category {
        Some(c) => vec![c],
        None => Category::all().to_vec(),
    };

    let mut shown = 0;
    println!("{:<8} {:<14} {:<4} TITLE", "TYPE", "CATEGORY", "ID");
    println!("{}", "-".repeat(60));

    for t in &types {
        for c in &categories {
            let Some(items) = catalog.items(*t, *c) else {
                continue;
            };
            for (id, item) in items.iter().enumerate() {
                println!("{:<8} {:<14} {:<4} {}", t, c, id, item.title);
                shown += 1;
            }
        }
    }

    if shown == 0 {
        println!("(no matching entries)");
    }

    Ok(())
}

/// Show the resolved configuration
fn show_config() -> Result<()> {
    let config = config::config()?;

    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none found)"),
    }
    match &config.catalog {
        Some(path) => println!("Catalog: {}", path.display()),
        None => println!("Catalog: (bundled default)"),
    }

    Ok(())
}
