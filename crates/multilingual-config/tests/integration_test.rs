//! Integration tests for multilingual-config crate.

use multilingual_config::{Config, ConfigCache, ConfigError, ConfigLoader};
use std::io::Write;
use std::sync::Arc;
use std::thread;

#[test]
fn test_default_config_validation() {
    let config = Config::default();
    assert!(config.validate_all().is_ok());
    assert_eq!(config.localization.default_language, "en");

    let mut broken = config;
    broken.logging.level = "chatty".to_string();
    assert!(broken.validate_all().is_err());
}

#[test]
fn test_config_cache() {
    let config = Config::default();
    let cache = ConfigCache::new(config.clone());

    let cached_config = cache.get();
    assert_eq!(
        cached_config.localization.default_language,
        config.localization.default_language
    );

    let mut new_config = config;
    new_config.localization.default_language = "fr-FR".to_string();
    cache.update(new_config);

    // Readers holding the old snapshot keep it
    assert_eq!(cached_config.localization.default_language, "en");
    assert_eq!(cache.get().localization.default_language, "fr-FR");
    assert_eq!(cache.default_language(), "fr-FR");
}

#[test]
fn test_config_cache_shared_across_threads() {
    let cache = Arc::new(ConfigCache::default());

    let writer = {
        let cache = Arc::clone(&cache);
        thread::spawn(move || {
            let mut config = Config::default();
            config.localization.default_language = "de".to_string();
            cache.update(config);
        })
    };
    writer.join().unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || cache.get().localization.default_language.clone())
        })
        .collect();

    for reader in readers {
        assert_eq!(reader.join().unwrap(), "de");
    }
}

#[test]
fn test_logging_settings_conversion() {
    let mut config = Config::default();
    config.logging.level = "debug".to_string();
    config.logging.json_format = true;
    config.logging.file_path = Some("/tmp/multilingual.log".to_string());

    let logging = config.logging.to_logging_config();
    assert_eq!(logging.level, "debug");
    assert!(logging.json_format);
    assert_eq!(logging.file_path.as_deref(), Some("/tmp/multilingual.log"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "localization:\n  default_language: \"zh-Hans\"").unwrap();

    let config = ConfigLoader::load_config_with(file.path(), |_| None).unwrap();
    assert_eq!(config.localization.default_language, "zh-Hans");

    let error = ConfigLoader::load_config_with(file.path().with_extension("missing"), |_| None)
        .unwrap_err();
    assert!(matches!(error, ConfigError::IoError(_)));
}
