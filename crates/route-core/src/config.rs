//! Configuration for the route planner.
//!
//! Load order: `.route/config.toml` → environment variables → defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Top-level route planner configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    pub map: MapConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Which map to route over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Map file (`.toml` or `.json`). The bundled east coast map when unset.
    pub path: Option<PathBuf>,
}

/// How directions are printed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format: {}. Use 'text' or 'json'.", other),
        }
    }
}

/// Log filter used when `RUST_LOG` is not set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

impl RouteConfig {
    /// Load config from `.route/config.toml` in the project root, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".route").join("config.toml");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        // A relative map path is relative to the project root, not the cwd.
        if let Some(path) = config.map.path.take() {
            config.map.path = Some(if path.is_relative() {
                project_root.join(path)
            } else {
                path
            });
        }

        if let Ok(path) = std::env::var("ROUTE_MAP")
            && !path.is_empty()
        {
            config.map.path = Some(PathBuf::from(path));
        }
        if let Ok(format) = std::env::var("ROUTE_FORMAT")
            && !format.is_empty()
        {
            config.output.format = format.parse()?;
        }
        if let Ok(level) = std::env::var("ROUTE_LOG_LEVEL")
            && !level.is_empty()
        {
            config.logging.level = level;
        }

        config.logging.level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
            anyhow::bail!(
                "invalid logging level '{}', expected one of: {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            );
        }

        Ok(config)
    }
}
