use std::{fs, path::Path};

use anyhow::{Context, Result};
use mining_map_core::MapConfig;

/// Reads a map configuration from the TOML file at `path`.
pub(crate) fn load(path: &Path) -> Result<MapConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read map configuration at {}", path.display()))?;
    parse(&contents).with_context(|| format!("invalid map configuration in {}", path.display()))
}

/// Parses a map configuration from TOML text. Missing fields keep their defaults.
pub(crate) fn parse(contents: &str) -> Result<MapConfig> {
    toml::from_str(contents).context("failed to parse map configuration toml contents")
}
