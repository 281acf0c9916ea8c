use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::SxlError;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "enabled")]
    pub pretty: bool,
    #[serde(default = "enabled")]
    pub check_schema: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            check_schema: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct LayoutConfig {
    /// Accent applied to containers that do not set their own.
    pub accent_color: Option<i64>,
}

fn enabled() -> bool {
    true
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("SILOXANE_CONFIG") {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|p| p.join("siloxane").join("config.toml"))
}

pub fn parse_config(content: &str) -> Result<Config, SxlError> {
    Ok(toml::from_str(content)?)
}

fn read_config(path: &Path) -> Config {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Config::default();
    };

    match parse_config(&content) {
        Ok(config) => {
            debug!(path = %path.display(), "loaded config");
            config
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring unreadable config");
            Config::default()
        }
    }
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) => read_config(&path),
        None => Config::default(),
    }
}

/// Output settings after applying command-line overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub pretty: bool,
    pub check_schema: bool,
    pub accent_color: Option<i64>,
}

pub fn resolve_settings(
    config: &Config,
    compact: bool,
    no_check: bool,
    accent: Option<i64>,
) -> Settings {
    Settings {
        pretty: config.output.pretty && !compact,
        check_schema: config.output.check_schema && !no_check,
        accent_color: accent.or(config.layout.accent_color),
    }
}
