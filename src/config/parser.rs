use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use validator::Validate;

use super::models::MonitorConfig;

/// Errors that can occur during configuration parsing
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to open config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Configuration validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Other(String),
}

/// Provides default configuration file path
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".gasstation").join("config.yaml"))
        .ok_or_else(|| ConfigError::Other("Could not determine home directory".to_string()))
}

/// Loads and validates a monitor configuration file
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<MonitorConfig, ConfigError> {
    let mut file = File::open(&config_path).map_err(ConfigError::FileError)?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(ConfigError::FileError)?;

    parse_config(&content)
}

/// Parses and validates a monitor configuration from YAML text
pub fn parse_config(content: &str) -> Result<MonitorConfig, ConfigError> {
    // An empty document means "all defaults"
    if content.trim().is_empty() {
        return Ok(MonitorConfig::default());
    }

    let config: MonitorConfig = serde_yaml::from_str(content).map_err(ConfigError::ParseError)?;

    config.validate().map_err(ConfigError::ValidationError)?;

    Ok(config)
}
