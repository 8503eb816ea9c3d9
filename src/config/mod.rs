mod types;

pub use types::{ConfigOverrides, ConverterConfig};

use crate::error::{GqlSpansqlError, Result};
use std::fs;

/// Load configuration from a TOML file
pub fn load_config(path: &str) -> Result<ConverterConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| GqlSpansqlError::Config(format!("Failed to read config file '{}': {}", path, e)))?;

    let config: ConverterConfig = toml::from_str(&contents)?;
    config.validate()?;

    tracing::debug!("Loaded configuration from {}: {:?}", path, config);
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save_config(config: &ConverterConfig, path: &str) -> Result<()> {
    config.validate()?;

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)
        .map_err(|e| GqlSpansqlError::Config(format!("Failed to write config file '{}': {}", path, e)))?;

    Ok(())
}
