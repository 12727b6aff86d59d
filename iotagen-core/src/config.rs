//! Configuration loading from iotagen.toml.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{IotagenError, IotagenResult};

/// Main configuration structure for iotagen.toml.
///
/// Every field is optional; command-line flags override file values.
#[derive(Debug, Deserialize, Default)]
pub struct IotagenConfig {
    /// Type names to extract when the flag is omitted.
    pub types: Option<Vec<String>>,
    /// Extra directory names to prune during the scan.
    pub exclude: Option<Vec<String>>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from iotagen.toml if it exists.
pub fn load_config(root: &Path) -> IotagenResult<Option<IotagenConfig>> {
    let path = root.join("iotagen.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path).map_err(|e| IotagenError::io(&path, e))?;
    let cfg = toml::from_str(&content).map_err(|e| IotagenError::config(&path, e.to_string()))?;
    Ok(Some(cfg))
}
