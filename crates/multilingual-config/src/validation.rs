//! Custom validators for configuration fields

use unic_langid::LanguageIdentifier;
use validator::ValidationError;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Validate that a string is a well-formed BCP-47 language tag
pub fn validate_language_tag(tag: &str) -> Result<(), ValidationError> {
    if tag.trim().is_empty() {
        return Err(ValidationError::new("empty_language_tag"));
    }

    match tag.parse::<LanguageIdentifier>() {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("invalid_language_tag")),
    }
}

/// Validate a log filter: a bare level, or comma-separated `target=level` directives
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if level.trim().is_empty() {
        return Err(ValidationError::new("empty_log_level"));
    }

    let valid = level.split(',').all(|directive| {
        let level = directive
            .rsplit_once('=')
            .map_or(directive, |(_, level)| level)
            .trim()
            .to_ascii_lowercase();
        LOG_LEVELS.contains(&level.as_str())
    });

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_tag() {
        assert!(validate_language_tag("en").is_ok());
        assert!(validate_language_tag("en-US").is_ok());
        assert!(validate_language_tag("zh-Hans").is_ok());
        assert!(validate_language_tag("zh-Hans-CN").is_ok());

        assert!(validate_language_tag("").is_err());
        assert!(validate_language_tag("   ").is_err());
        assert!(validate_language_tag("not a tag").is_err());
        assert!(validate_language_tag("en_US!").is_err());
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("info").is_ok());
        assert!(validate_log_level("DEBUG").is_ok());
        assert!(validate_log_level("multilingual_object=trace").is_ok());
        assert!(validate_log_level("info,multilingual_object=debug").is_ok());

        assert!(validate_log_level("").is_err());
        assert!(validate_log_level("verbose").is_err());
        assert!(validate_log_level("multilingual_object=loud").is_err());
    }
}
