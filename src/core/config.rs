//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.werkbar/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use reqwest::Url;

use crate::core::nav::{InvalidLocation, Location};
use crate::core::work::WorkId;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WerkbarConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Page URL the navigation runs over.
    pub page_url: Option<String>,
    /// Work shown when the location carries no `werk` parameter.
    pub default_work: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Explicit catalog document URL. Defaults to `bwvs.json` next to the
    /// page.
    pub url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PAGE_URL: &str = "http://localhost:8000/";
pub const DEFAULT_WORK: &str = "bwv1006";
pub const CATALOG_DOCUMENT: &str = "bwvs.json";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub page_location: Location,
    pub catalog_url: Url,
    pub default_work: WorkId,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Location(InvalidLocation),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Location(e) => write!(f, "config location error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<InvalidLocation> for ConfigError {
    fn from(e: InvalidLocation) -> Self {
        ConfigError::Location(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.werkbar/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".werkbar").join("config.toml"))
}

/// Load config from `~/.werkbar/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WerkbarConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WerkbarConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WerkbarConfig::default());
        }
    };

    if !path.exists() {
        info!(
            "No config file found, generating default at {}",
            path.display()
        );
        generate_default_config(&path);
        return Ok(WerkbarConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: WerkbarConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Werkbar Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# page_url = "http://localhost:8000/"  # Or set WERKBAR_PAGE_URL env var
# default_work = "bwv1006"

# [catalog]
# url = "http://localhost:8000/bwvs.json"  # Or set WERKBAR_CATALOG_URL env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// CLI overrides (None = flag not specified).
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub url: Option<&'a str>,
    pub werk: Option<&'a str>,
    pub catalog_url: Option<&'a str>,
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &WerkbarConfig, cli: CliOverrides<'_>) -> Result<ResolvedConfig, ConfigError> {
    // Page URL: CLI → env → config → default
    let page_url = cli
        .url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("WERKBAR_PAGE_URL").ok())
        .or_else(|| config.general.page_url.clone())
        .unwrap_or_else(|| DEFAULT_PAGE_URL.to_string());

    let mut page_location = Location::parse(&page_url)?;

    // --werk pins the current work by rewriting the location's query
    if let Some(werk) = cli.werk {
        page_location = page_location.with_werk(werk);
    }

    // Catalog URL: CLI → env → config → next to the page
    let catalog_url = match cli
        .catalog_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("WERKBAR_CATALOG_URL").ok())
        .or_else(|| config.catalog.url.clone())
    {
        Some(explicit) => Url::parse(&explicit)
            .map_err(|e| InvalidLocation(format!("{explicit}: {e}")))?,
        None => page_location.join(CATALOG_DOCUMENT)?,
    };

    // Default work: config → built-in
    let default_work = WorkId::new(
        config
            .general
            .default_work
            .clone()
            .unwrap_or_else(|| DEFAULT_WORK.to_string()),
    );

    Ok(ResolvedConfig {
        page_location,
        catalog_url,
        default_work,
    })
}
