//! Read/write map descriptions from disk.

use crate::graph::GraphDescription;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// On-disk encoding of a map file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapFormat {
    Toml,
    Json,
}

impl MapFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => anyhow::bail!(
                "unsupported map file {}: expected a .toml or .json extension",
                path.display()
            ),
        }
    }
}

/// Parse a map description from a string.
pub fn parse(content: &str, format: MapFormat) -> Result<GraphDescription> {
    match format {
        MapFormat::Toml => toml::from_str(content).context("failed to parse TOML map"),
        MapFormat::Json => serde_json::from_str(content).context("failed to parse JSON map"),
    }
}

/// Serialize a map description to a string.
pub fn render(description: &GraphDescription, format: MapFormat) -> Result<String> {
    match format {
        MapFormat::Toml => {
            toml::to_string_pretty(description).context("failed to serialize map to TOML")
        }
        MapFormat::Json => {
            serde_json::to_string_pretty(description).context("failed to serialize map to JSON")
        }
    }
}

/// Load a map description from disk.
pub fn load(path: &Path) -> Result<GraphDescription> {
    let format = MapFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read map from {}", path.display()))?;
    parse(&content, format).with_context(|| format!("invalid map file {}", path.display()))
}

/// Save a map description, creating parent directories if needed.
pub fn save(path: &Path, description: &GraphDescription) -> Result<()> {
    let format = MapFormat::from_path(path)?;
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create map directory {}", dir.display()))?;
    }
    let content = render(description, format)?;
    fs::write(path, content)
        .with_context(|| format!("failed to write map to {}", path.display()))?;
    Ok(())
}
