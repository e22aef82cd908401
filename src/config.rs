//! Configuration structures and loading logic

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Longest digest prefix worth showing (a full sha256 in hex)
const MAX_DIGEST_CHARS: usize = 64;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Row ordering for listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Keep listing order
    #[default]
    None,
    Name,
    /// Largest first
    Size,
}

/// Display configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub output_format: OutputFormat,
    pub sort_by: SortBy,
    pub digest_chars: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            sort_by: SortBy::default(),
            digest_chars: default_digest_chars(),
        }
    }
}

impl DisplayConfig {
    /// Load configuration from file with environment variable overrides
    ///
    /// Without an explicit path, `<config_dir>/model-attrs/config.toml` is
    /// read when it exists.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let path = path.or_else(|| default_config_path().filter(|p| p.exists()));

        let mut config = if let Some(path) = path {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Self = toml::from_str(&content).context("Failed to parse TOML config")?;
            tracing::debug!(path = ?path, "Loaded config file");
            config
        } else {
            Self::default()
        };

        // Environment variable overrides
        if let Ok(format) = std::env::var("MODEL_ATTRS_OUTPUT_FORMAT") {
            config.output_format = OutputFormat::from_str(&format, true)
                .map_err(anyhow::Error::msg)
                .context("Invalid MODEL_ATTRS_OUTPUT_FORMAT value")?;
        }
        if let Ok(sort_by) = std::env::var("MODEL_ATTRS_SORT_BY") {
            config.sort_by = SortBy::from_str(&sort_by, true)
                .map_err(anyhow::Error::msg)
                .context("Invalid MODEL_ATTRS_SORT_BY value")?;
        }
        if let Ok(chars) = std::env::var("MODEL_ATTRS_DIGEST_CHARS") {
            config.digest_chars = chars
                .parse()
                .context("Invalid MODEL_ATTRS_DIGEST_CHARS value")?;
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.digest_chars > MAX_DIGEST_CHARS {
            anyhow::bail!(
                "digest_chars must be <= {} (got {})",
                MAX_DIGEST_CHARS,
                self.digest_chars
            );
        }
        Ok(())
    }
}

/// Default config file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("model-attrs").join("config.toml"))
}

fn default_digest_chars() -> usize {
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.sort_by, SortBy::None);
        assert_eq!(config.digest_chars, 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_digest_chars_validation() {
        let config = DisplayConfig {
            digest_chars: 65,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = DisplayConfig {
            digest_chars: 64,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: DisplayConfig = toml::from_str(r#"sort_by = "size""#).unwrap();
        assert_eq!(config.sort_by, SortBy::Size);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.digest_chars, 12);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(toml::from_str::<DisplayConfig>(r#"output_format = "xml""#).is_err());
    }
}
