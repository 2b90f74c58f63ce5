// SPDX-License-Identifier: MPL-2.0
//! Where the application keeps its configuration on disk.
//!
//! Resolution tries, in order: an explicit override (tests), the
//! `--config-dir` CLI flag, the `ADVERSE_LENS_CONFIG_DIR` environment
//! variable, then the platform config directory from the `dirs` crate.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name appended to the platform config root.
const APP_NAME: &str = "AdverseLens";

/// Environment variable that redirects the config directory.
pub const ENV_CONFIG_DIR: &str = "ADVERSE_LENS_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` flag. Call once at startup, before any
/// path lookup.
///
/// # Panics
///
/// Panics on a second call; the underlying `OnceLock` is set once.
pub fn init_cli_override(config_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

/// The directory holding `settings.toml`, or `None` when the platform
/// provides no config root.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with(None)
}

/// Like [`config_dir`], but an explicit `override_path` wins over every
/// other source.
pub fn config_dir_with(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(cli_override)
        .or_else(env_override)
        .or_else(platform_default)
}

fn cli_override() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_override() -> Option<PathBuf> {
    std::env::var(ENV_CONFIG_DIR)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn platform_default() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME))
}
