use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional user configuration, read from `<config-dir>/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// tshark binary to use when neither the --tshark flag nor the
    /// GATTRACE_TSHARK environment variable is set.
    pub tshark_path: Option<String>,
}

impl Config {
    /// Load the config file, falling back to defaults when it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config =
            toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }
}
