// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and merging.

use crate::error::{CmlintError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::render::ConfigFormat;
use super::schema::LintConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    ".commitlintrc.json",
    ".commitlintrc",
    ".commitlintrc.toml",
    "commitlint.toml",
];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = search_ancestors(start_dir) {
        return Some(path);
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        if let Some(path) = search_dir(&home) {
            return Some(path);
        }
    }

    // Check XDG config directory
    let config_dir = dirs::config_dir()?;
    let user_config = config_dir.join("cmlint").join("config.toml");
    user_config.exists().then_some(user_config)
}

/// Walk from `start_dir` up to the filesystem root.
fn search_ancestors(start_dir: &Path) -> Option<PathBuf> {
    start_dir.ancestors().find_map(search_dir)
}

fn search_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<LintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using canonical record");
            Ok(super::default::canonical())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CmlintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let format = ConfigFormat::from_path(path).ok_or_else(|| {
        CmlintError::Config(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    })?;
    if format == ConfigFormat::EsModule {
        return Err(CmlintError::Config(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CmlintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content, format).map_err(|e| {
        tracing::debug!("Rejected configuration at {:?}: {}", path, e);
        e
    })
}

/// Parse configuration from a string in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<LintConfig> {
    match format {
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| {
            CmlintError::Config(ConfigError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
            })
        }),
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| {
            CmlintError::Config(ConfigError::ParseError {
                message: format!("Failed to parse TOML: {}", e),
            })
        }),
        ConfigFormat::EsModule => Err(CmlintError::Config(ConfigError::ParseError {
            message: "ES module configuration can only be written, not read".to_string(),
        })),
    }
}

/// Merge two configurations, with the overlay taking precedence.
///
/// Overlay rules replace base rules of the same name. The help URL is kept
/// from the base when the overlay has none.
pub fn merge_configs(base: LintConfig, overlay: LintConfig) -> LintConfig {
    tracing::trace!(
        "Merging {} overlay rules onto {} base rules",
        overlay.rules.len(),
        base.rules.len()
    );

    let mut rules = base.rules;
    rules.extend(overlay.rules);

    LintConfig {
        default_ignores: overlay.default_ignores,
        help_url: overlay.help_url.or(base.help_url),
        rules,
    }
}
