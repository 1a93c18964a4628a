//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use binrel_domain::ReflexivityMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Reflexivity check used by `properties`
    #[serde(default)]
    pub reflexivity: ReflexivityMode,

    /// Universe used by `complement`
    #[serde(default)]
    pub complement_universe: UniverseChoice,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pairs followed by the 0/1 matrix
    Plain,
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// Universe a complement is taken against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniverseChoice {
    /// Declared carriers where present, derived domain/range otherwise
    #[default]
    Auto,
    /// Declared carriers only; fails without them
    External,
    /// Derived domain × range, ignoring carriers
    Derived,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".binrel").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file '{}' does not exist",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => {
                let path = match Self::path() {
                    Ok(path) => path,
                    Err(e) => {
                        tracing::debug!("No default config location: {}", e);
                        return Ok(Self::default());
                    }
                };
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            color: true,
            reflexivity: ReflexivityMode::PairLocal,
            complement_universe: UniverseChoice::Auto,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Plain
}
