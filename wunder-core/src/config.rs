use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, anyhow};
use directories::BaseDirs;

use crate::{
    error::WeatherError,
    structure::{self, Node},
};

/// Example `~/.weatherrc` printed as setup guidance when no config exists.
pub const EXAMPLE: &str = "\
# ~/.weatherrc
wunderground_api_key = \"your-api-key-here\"
city = \"CA/San_Francisco\"
";

/// Validated configuration, built once per run and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub city: String,
    /// The file this config was loaded from.
    pub source: PathBuf,
}

impl Config {
    /// Load and validate a config file.
    ///
    /// Fails with [`WeatherError::MissingConfig`] if the file does not
    /// exist and [`WeatherError::InvalidConfig`] if it cannot be parsed or
    /// lacks a non-empty `wunderground_api_key` or `city`.
    pub fn load(path: &Path) -> Result<Self, WeatherError> {
        if !path.exists() {
            return Err(WeatherError::MissingConfig { path: path.to_path_buf() });
        }

        let contents = fs::read_to_string(path)?;

        let tree: toml::Value =
            toml::from_str(&contents).map_err(|e| WeatherError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let root = structure::transform(tree);

        let api_key = required_field(&root, "wunderground_api_key", path)?;
        let city = required_field(&root, "city", path)?;

        Ok(Self { api_key, city, source: path.to_path_buf() })
    }

    /// Default config location: `~/.weatherrc`.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = BaseDirs::new().ok_or_else(|| anyhow!("Could not determine home directory"))?;

        Ok(dirs.home_dir().join(".weatherrc"))
    }
}

fn required_field(root: &Node, name: &str, path: &Path) -> Result<String, WeatherError> {
    let invalid = |reason: String| WeatherError::InvalidConfig {
        path: path.to_path_buf(),
        reason,
    };

    let value = root
        .get(name)
        .ok_or_else(|| invalid(format!("missing required field '{name}'")))?
        .as_str()
        .ok_or_else(|| invalid(format!("field '{name}' must be a string")))?;

    if value.is_empty() {
        return Err(invalid(format!("field '{name}' must not be empty")));
    }

    Ok(value.to_string())
}
