use std::fs;
use std::path::Path;

use crate::error::{GateError, Result};

use super::GateConfig;

/// Default configuration file name looked up at the project root.
pub const CONFIG_FILE_NAME: &str = ".repo-gate.toml";

pub trait ConfigLoader {
    /// Load the configuration for a project root, falling back to defaults
    /// when no config file exists.
    fn load(&self, root: &Path) -> Result<GateConfig>;

    /// Load configuration from an explicit file path.
    ///
    /// # Errors
    /// Returns an error if the file is missing or not valid TOML.
    fn load_from_path(&self, path: &Path) -> Result<GateConfig>;
}

pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn parse(path: &Path) -> Result<GateConfig> {
        let content = fs::read_to_string(path)?;
        let config: GateConfig = toml::from_str(&content)?;
        validate(&config)?;
        Ok(config)
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self, root: &Path) -> Result<GateConfig> {
        let candidate = root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::parse(&candidate)
        } else {
            Ok(GateConfig::default())
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<GateConfig> {
        if !path.is_file() {
            return Err(GateError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        Self::parse(path)
    }
}

fn validate(config: &GateConfig) -> Result<()> {
    if config.limits.max_file_lines == 0 {
        return Err(GateError::Config(
            "limits.max_file_lines must be greater than zero".to_string(),
        ));
    }

    if config.limits.max_func_lines == 0 {
        return Err(GateError::Config(
            "limits.max_func_lines must be greater than zero".to_string(),
        ));
    }

    if config.temp.preview_limit == 0 {
        return Err(GateError::Config(
            "temp.preview_limit must be greater than zero".to_string(),
        ));
    }

    for pattern in &config.walk.exclude {
        globset::Glob::new(pattern).map_err(|e| GateError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
