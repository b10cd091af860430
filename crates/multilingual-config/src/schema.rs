//! Configuration schema definitions using serde with validation attributes.

use multilingual_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Translation resolution settings.
    #[validate]
    pub localization: LocalizationConfig,
    /// Logging settings.
    #[validate]
    pub logging: LoggingSettings,
}

/// Settings consulted by the translation resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LocalizationConfig {
    /// Language tried last, after the requested culture and its parents.
    #[validate(custom = "crate::validation::validate_language_tag")]
    pub default_language: String,
    /// Whether `en-US` may fall back to `en` before the default language.
    pub fallback_to_parent_cultures: bool,
    /// Whether translation tags must match the culture name exactly.
    pub case_sensitive: bool,
}

/// Logging settings as they appear in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `multilingual_object=debug`.
    #[validate(custom = "crate::validation::validate_log_level")]
    pub level: String,
    /// Emit JSON lines.
    pub json_format: bool,
    /// Optional log file; stdout when absent.
    pub file_path: Option<String>,
}

impl Config {
    /// Runs every validation rule on the configuration.
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()
    }
}

impl LoggingSettings {
    /// Converts file settings into the subscriber configuration.
    #[must_use]
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            json_format: self.json_format,
            file_path: self.file_path.clone(),
            ..LoggingConfig::default()
        }
    }
}
