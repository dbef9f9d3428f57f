use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::CliError;

/// Default settings file looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "tablice.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub count: usize,
    pub seed: Option<u64>,
    pub voivodeships: Vec<String>,
    pub counties: Vec<String>,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            count: 1,
            seed: None,
            voivodeships: Vec::new(),
            counties: Vec::new(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Load settings from `path`, or from [`DEFAULT_SETTINGS_FILE`] when it
/// exists. An explicit path that does not exist is an error.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, CliError> {
    let path = match path {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_SETTINGS_FILE);
            if !default.exists() {
                return Ok(Settings::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(path)?;
    parse_settings(&content)
}

pub fn parse_settings(content: &str) -> Result<Settings, CliError> {
    let settings: Settings = toml::from_str(content)?;
    if settings.count == 0 {
        return Err(CliError::InvalidConfig("count must be at least 1".to_string()));
    }
    Ok(settings)
}
