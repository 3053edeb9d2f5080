//! Configuration management for the resume matcher

use crate::error::{Result, ResumeMatcherError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub taxonomy: TaxonomyConfig,
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    /// Path of the JSON taxonomy file consulted by detection. Loading is
    /// strict: if the file is missing or malformed the run aborts.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    pub enable_caching: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        let taxonomy_path = Self::config_dir().join("taxonomy.json");

        Self {
            taxonomy: TaxonomyConfig {
                path: taxonomy_path,
            },
            processing: ProcessingConfig {
                enable_caching: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load configuration, creating the default file on first run. An
    /// explicit override path must already exist.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let config_path = match override_path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeMatcherError::Configuration(format!(
                    "Failed to parse config '{}': {}",
                    config_path.display(),
                    e
                ))
            })?;
            Ok(config)
        } else if override_path.is_some() {
            Err(ResumeMatcherError::Configuration(format!(
                "Config file not found: {}",
                config_path.display()
            )))
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
    }

    fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn taxonomy_path(&self) -> &Path {
        &self.taxonomy.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.taxonomy.path, config.taxonomy.path);
        assert_eq!(parsed.output.format, OutputFormat::Console);
        assert!(parsed.processing.enable_caching);
    }

    #[test]
    fn test_missing_override_path_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/config.toml")));
        assert!(matches!(result, Err(ResumeMatcherError::Configuration(_))));
    }
}
