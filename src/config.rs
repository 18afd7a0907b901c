//! Configuration for locating the catalog.
//!
//! Catalog sources (highest priority first):
//! 1. `--catalog` CLI flag (handled by the CLI, bypasses this module)
//! 2. Environment variable (YFFR_CATALOG)
//! 3. Config file (.yffr/config.yaml)
//! 4. ~/.yffr/catalog.json, when it exists
//! 5. Bundled default catalog
//!
//! Config file discovery:
//! - Searches current directory and parents for .yffr/config.yaml
//! - The catalog path in the config file is relative to the config
//!   file's parent directory

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<std::result::Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Catalog JSON file (relative to the config file's parent)
    pub catalog: Option<String>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Catalog file to load; `None` means use the bundled catalog
    pub catalog: Option<PathBuf>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".yffr").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's parent
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(&path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Home-relative default catalog: ~/.yffr/catalog.json, when it exists
fn home_default_catalog(home: &Path) -> Option<PathBuf> {
    let path = home.join(".yffr").join("catalog.json");
    path.exists().then_some(path)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    resolve_config(
        std::env::var("YFFR_CATALOG").ok().map(PathBuf::from),
        find_config_file(),
        dirs::home_dir(),
    )
}

/// Pick the catalog from the gathered sources, highest priority first:
/// env var, config file, home default. `None` means use the bundled
/// catalog.
fn resolve_config(
    env_catalog: Option<PathBuf>,
    config_file: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<ResolvedConfig> {
    if let Some(path) = env_catalog {
        return Ok(ResolvedConfig {
            catalog: Some(path),
            config_file,
        });
    }

    if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;
        let base_dir = config_path.parent().unwrap_or(Path::new("."));

        if let Some(path_str) = config.paths.catalog.as_deref() {
            return Ok(ResolvedConfig {
                catalog: Some(resolve_path(base_dir, path_str)),
                config_file,
            });
        }
    }

    Ok(ResolvedConfig {
        catalog: home.as_deref().and_then(home_default_catalog),
        config_file,
    })
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("Configuration error: {}", e),
    }
}
