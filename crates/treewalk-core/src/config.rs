//! Layered configuration.
//!
//! Sources, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. `treewalk.toml` (or the file passed to [`TreewalkConfig::load_from`])
//! 3. Environment variables prefixed `TREEWALK_`, nested keys split on `__`
//!    (e.g. `TREEWALK_DISPLAY__SCALE=2`)
//!
//! ```toml
//! algorithm = "dfs"
//!
//! [display]
//! color = false
//! scale = 1.5
//! format = "json"
//!
//! [logging]
//! level = "debug"
//!
//! [trees.dfs]
//! root = 1
//! nodes = [{ id = 1, children = [2, 3] }]
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithm::Algorithm;
use crate::error::{ParseEnumError, Result};
use crate::tree::{Tree, TreeCatalog, TreeSpec};

/// Default config file name, looked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "treewalk.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TREEWALK_";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// Figment could not merge or extract the sources.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    /// A value was well-formed but out of range.
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue {
        /// Dotted key path.
        key: String,
        /// Why it was rejected.
        message: String,
    },
}

/// How frames and results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "table" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ParseEnumError {
                kind: "format",
                value: s.to_string(),
                expected: "text, json",
            }),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Use ANSI colors in text output.
    pub color: bool,
    /// Multiplier applied to layout coordinates.
    pub scale: f32,
    /// Output format.
    pub format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            scale: 1.0,
            format: OutputFormat::Text,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Optional replacements for the reference trees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreesConfig {
    /// Tree used with BFS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfs: Option<TreeSpec>,
    /// Tree used with DFS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dfs: Option<TreeSpec>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreewalkConfig {
    /// Algorithm selected at startup.
    pub algorithm: Algorithm,
    /// Display settings.
    pub display: DisplayConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Tree overrides.
    pub trees: TreesConfig,
}

impl TreewalkConfig {
    /// Loads defaults, `treewalk.toml` if present, then the environment.
    pub fn load() -> std::result::Result<Self, ConfigError> {
        Self::extract(Self::figment(Path::new(DEFAULT_CONFIG_FILE)))
    }

    /// Loads defaults, the given file (which must exist), then the environment.
    pub fn load_from(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Self::extract(Self::figment(path))
    }

    /// The merged provider chain.
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn extract(figment: Figment) -> std::result::Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let scale = self.display.scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "display.scale".to_string(),
                message: format!("must be a positive number, got {scale}"),
            });
        }
        Ok(())
    }

    /// Builds the tree pair: reference trees with configured overrides.
    pub fn catalog(&self) -> Result<TreeCatalog> {
        let mut catalog = TreeCatalog::reference();
        for algorithm in Algorithm::ALL {
            let spec = match algorithm {
                Algorithm::Bfs => self.trees.bfs.as_ref(),
                Algorithm::Dfs => self.trees.dfs.as_ref(),
            };
            if let Some(spec) = spec {
                catalog = catalog.with_variant(algorithm, Tree::from_spec(spec)?);
            }
        }
        Ok(catalog)
    }
}
