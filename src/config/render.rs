// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Writing configuration in the formats the commit linter reads.

use crate::error::{CmlintError, Result};
use std::path::Path;

use super::schema::LintConfig;

/// On-disk configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.commitlintrc.json`
    Json,
    /// `commitlint.toml`
    Toml,
    /// `commitlint.config.mjs`, write-only
    EsModule,
}

impl ConfigFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name == ".commitlintrc" {
            return Some(ConfigFormat::Json);
        }
        match path.extension()?.to_str()? {
            "json" => Some(ConfigFormat::Json),
            "toml" => Some(ConfigFormat::Toml),
            "mjs" | "js" => Some(ConfigFormat::EsModule),
            _ => None,
        }
    }

    /// Get the string representation of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Toml => "toml",
            ConfigFormat::EsModule => "esm",
        }
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render a configuration record.
pub fn render(config: &LintConfig, format: ConfigFormat) -> Result<String> {
    tracing::trace!("Rendering configuration as {}", format);

    match format {
        ConfigFormat::Json => to_json(config).map(|mut json| {
            json.push('\n');
            json
        }),
        ConfigFormat::Toml => toml::to_string(config).map_err(|e| CmlintError::Render {
            format: format.to_string(),
            message: e.to_string(),
        }),
        ConfigFormat::EsModule => Ok(format!("export default {};\n", to_json(config)?)),
    }
}

/// Write a configuration record to a file, picking the format from its name.
pub fn write_config(config: &LintConfig, path: &Path) -> Result<()> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| {
        CmlintError::Config(crate::error::ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    })?;

    tracing::debug!("Writing {} configuration to: {:?}", format, path);
    std::fs::write(path, render(config, format)?)?;
    Ok(())
}

fn to_json(config: &LintConfig) -> Result<String> {
    serde_json::to_string_pretty(config).map_err(|e| CmlintError::Render {
        format: ConfigFormat::Json.to_string(),
        message: e.to_string(),
    })
}
