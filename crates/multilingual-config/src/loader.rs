//! Configuration loading utilities

use crate::error::{ConfigError, ConfigResult};
use crate::Config;
use std::env;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "MULTILINGUAL_CONFIG_PATH";
/// Overrides `localization.default_language`.
pub const DEFAULT_LANGUAGE_VAR: &str = "MULTILINGUAL_DEFAULT_LANGUAGE";
/// Overrides `localization.fallback_to_parent_cultures`.
pub const FALLBACK_TO_PARENT_VAR: &str = "MULTILINGUAL_FALLBACK_TO_PARENT";
/// Overrides `localization.case_sensitive`.
pub const CASE_SENSITIVE_VAR: &str = "MULTILINGUAL_CASE_SENSITIVE";
/// Overrides `logging.level`.
pub const LOG_LEVEL_VAR: &str = "MULTILINGUAL_LOG_LEVEL";

/// Configuration loader for the application
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> ConfigResult<Config> {
        Self::load_config_with(path, process_env)
    }

    /// Load configuration from a YAML file, reading overrides through `lookup`
    pub fn load_config_with<P, F>(path: P, lookup: F) -> ConfigResult<Config>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str_with(&content, lookup)
    }

    /// Parse, override and validate a YAML document
    pub fn from_yaml_str_with<F>(content: &str, lookup: F) -> ConfigResult<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An empty document deserializes to unit, not to a defaulted struct.
        let mut config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content)?
        };

        Self::apply_overrides(&mut config, lookup)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from `MULTILINGUAL_CONFIG_PATH`, `multilingual.yaml`, or defaults
    pub fn load() -> ConfigResult<Config> {
        let config = if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::load_config(&config_path)?
        } else if Path::new("multilingual.yaml").exists() {
            Self::load_config("multilingual.yaml")?
        } else if Path::new("multilingual.yml").exists() {
            Self::load_config("multilingual.yml")?
        } else {
            info!("No configuration file found, using defaults");
            Self::defaults_with(process_env)?
        };

        Ok(config)
    }

    /// Default configuration with overrides applied and validated
    pub fn defaults_with<F>(lookup: F) -> ConfigResult<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        Self::apply_overrides(&mut config, lookup)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Apply environment-style overrides to configuration
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(language) = lookup(DEFAULT_LANGUAGE_VAR) {
            config.localization.default_language = language.trim().to_string();
        }

        if let Some(value) = lookup(FALLBACK_TO_PARENT_VAR) {
            config.localization.fallback_to_parent_cultures = parse_var(FALLBACK_TO_PARENT_VAR, &value)?;
        }

        if let Some(value) = lookup(CASE_SENSITIVE_VAR) {
            config.localization.case_sensitive = parse_var(CASE_SENSITIVE_VAR, &value)?;
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.logging.level = level;
        }

        Ok(())
    }
}

fn process_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_var<T>(var: &str, value: &str) -> ConfigResult<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e| ConfigError::EnvParseError {
        var: var.to_string(),
        source: Box::new(e),
    })
}
