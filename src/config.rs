//! Configuration file support for ferro-sifts.
//!
//! This module loads `.ferro-sifts.toml` configuration files, which set
//! defaults for translation, caching and CLI output.
//!
//! # Example Configuration
//!
//! ```toml
//! [translate]
//! allow_empty = true
//!
//! [cache]
//! capacity = 5000
//!
//! [output]
//! format = "json"
//! ```
//!
//! # Config File Locations
//!
//! Configuration is searched in this order (first found wins):
//! 1. `.ferro-sifts.toml` in current directory
//! 2. `~/.config/ferro/sifts.toml`
//!
//! CLI flags take precedence over config file settings.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::cli::OutputFormat;
use crate::error::FerroError;
use crate::translate::TranslateOptions;

/// Parsed configuration from a .ferro-sifts.toml file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FerroSiftsConfig {
    /// Translation defaults.
    pub translate: TranslateOptions,
    /// Translation cache settings.
    pub cache: CacheConfig,
    /// CLI output settings.
    pub output: OutputConfig,
}

/// Cache section of the config file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of cached translations (0 disables caching).
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: 1000 }
    }
}

/// Output section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format name: text, json or tsv.
    pub format: Option<String>,
}

impl FerroSiftsConfig {
    /// Load configuration from the default locations.
    ///
    /// A file that exists but fails to parse is skipped with a warning.
    pub fn load() -> Option<Self> {
        let mut candidates = vec![PathBuf::from(".ferro-sifts.toml")];
        if let Some(home) = dirs_home() {
            candidates.push(home.join(".config").join("ferro").join("sifts.toml"));
        }

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_path(&path) {
                Ok(config) => {
                    debug!("Loaded config from {}", path.display());
                    return Some(config);
                }
                Err(e) => warn!("Ignoring config {}: {}", path.display(), e),
            }
        }

        None
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, FerroError> {
        let content = fs::read_to_string(path).map_err(|e| FerroError::Config {
            msg: format!("Failed to read {}: {}", path.display(), e),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, FerroError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String, FerroError> {
        toml::to_string_pretty(self).map_err(|e| FerroError::Config { msg: e.to_string() })
    }

    /// Output format from the config, if set.
    ///
    /// An unrecognised name is logged and treated as text.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output
            .format
            .as_deref()
            .map(|name| resolve_format(name, "config file"))
    }

    /// Merge this config with CLI arguments.
    /// CLI arguments take precedence.
    pub fn merge_with_cli(
        &self,
        cli_allow_empty: bool,
        cli_format: Option<&str>,
    ) -> EffectiveSettings {
        EffectiveSettings {
            options: TranslateOptions {
                allow_empty: cli_allow_empty || self.translate.allow_empty,
            },
            format: cli_format
                .map(|name| resolve_format(name, "command line"))
                .or_else(|| self.output_format())
                .unwrap_or_default(),
            cache_capacity: self.cache.capacity,
        }
    }
}

/// Settings after combining the config file with CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveSettings {
    pub options: TranslateOptions,
    pub format: OutputFormat,
    pub cache_capacity: usize,
}

fn resolve_format(name: &str, origin: &str) -> OutputFormat {
    OutputFormat::parse_name(name).unwrap_or_else(|| {
        warn!("Unknown output format '{}' from {}, using text", name, origin);
        OutputFormat::Text
    })
}

/// Get the user's home directory.
fn dirs_home() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
