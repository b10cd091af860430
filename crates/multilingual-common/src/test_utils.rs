//! Test utilities and shared test helpers for the multilingual workspace.
//!
//! Available to unit tests of this crate and, through the `testing` feature,
//! to the integration tests of the other workspace crates.

use crate::EntityId;
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may already own the global subscriber.
        let _ = fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Deterministic entity identifier derived from a small integer.
pub fn fixed_entity_id(n: u128) -> EntityId {
    EntityId(Uuid::from_u128(n))
}

/// A batch of deterministic, distinct entity identifiers.
pub fn fixed_entity_ids(count: usize) -> Vec<EntityId> {
    (1..=count as u128).map(fixed_entity_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_fixed_entity_ids_are_distinct() {
        let ids = fixed_entity_ids(5);
        assert_eq!(ids.len(), 5);
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 5);
        assert_eq!(ids[0], fixed_entity_id(1));
    }
}
