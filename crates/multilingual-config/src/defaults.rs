//! Default values for every configuration section.

use crate::schema::{Config, LocalizationConfig, LoggingSettings};

/// Default language used when no culture-specific translation matches.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

impl Default for Config {
    fn default() -> Self {
        Self {
            localization: LocalizationConfig::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            fallback_to_parent_cultures: true,
            case_sensitive: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_path: None,
        }
    }
}
