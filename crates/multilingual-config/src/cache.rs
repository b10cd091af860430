//! Shared resolver settings.
//!
//! The translation resolver loads a snapshot per request, so a default
//! language swapped in here applies to the next resolution without
//! restarting anything.

use crate::schema::Config;
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::debug;

/// Current localization and logging settings, readable without locking.
#[derive(Debug)]
pub struct ConfigCache {
    config: ArcSwap<Config>,
}

impl ConfigCache {
    /// Starts from `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
        }
    }

    /// Snapshot of the current settings; later updates don't affect it.
    #[must_use]
    pub fn get(&self) -> Arc<Config> {
        self.config.load_full()
    }

    /// Language the resolver falls back to last.
    #[must_use]
    pub fn default_language(&self) -> String {
        self.config.load().localization.default_language.clone()
    }

    /// Replaces the settings seen by subsequent snapshots.
    pub fn update(&self, config: Config) {
        debug!(
            default_language = %config.localization.default_language,
            "Replacing cached configuration"
        );
        self.config.store(Arc::new(config));
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
