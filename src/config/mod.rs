// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences as `settings.toml`.
//!
//! Settings sit in three tables: `[general]` for appearance, `[api]` for
//! the adverse-news service location, and `[listing]` for the records
//! table. The file lives in the directory resolved by
//! [`crate::app::paths`]; tests hand a directory to the
//! `*_with_override` functions instead.
//!
//! ```no_run
//! use adverse_lens::config;
//!
//! let (mut settings, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! settings.listing.page_size = Some(10);
//! config::save(&settings).expect("failed to save settings");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Appearance settings, the `[general]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// `"light"`, `"dark"`, or `"system"`.
    #[serde(default = "theme_mode_default", deserialize_with = "parse_theme_mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: theme_mode_default(),
        }
    }
}

/// Where the adverse-news service lives, the `[api]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiConfig {
    /// Service root, e.g. `http://screening.internal:9000`. The client
    /// appends the versioned API prefix itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Records table tuning, the `[listing]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingConfig {
    /// How many search records one table page shows.
    #[serde(default = "page_size_default", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: page_size_default(),
        }
    }
}

/// Everything `settings.toml` can carry. Absent tables and fields keep
/// their defaults, so hand-edited partial files stay valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub listing: ListingConfig,
}

impl Config {
    /// The configured page size clamped to the supported range.
    #[must_use]
    pub fn effective_page_size(&self) -> u32 {
        self.listing
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
    }
}

fn theme_mode_default() -> ThemeMode {
    ThemeMode::System
}

fn page_size_default() -> Option<u32> {
    Some(DEFAULT_PAGE_SIZE)
}

fn parse_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    ThemeMode::from_name(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid theme_mode: {raw}")))
}

fn settings_file(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Reads `settings.toml` from the default location.
///
/// Never fails: an unreadable or garbled file yields the default
/// configuration plus a warning for the user, and a missing file yields
/// the defaults silently.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Like [`load`], reading from `base_dir` when given.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = settings_file(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            eprintln!("Failed to load settings from {}: {}", path.display(), err);
            (
                Config::default(),
                Some("Settings file could not be read; defaults are in use.".to_string()),
            )
        }
    }
}

/// Parses the file at `path` as a configuration.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Writes `config` to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Like [`save`], writing under `base_dir` when given.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match settings_file(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Writes `config` to `path`, creating missing parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
