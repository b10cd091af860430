//! Error types for translation resolution and object mapping

use multilingual_common::EntityId;
use multilingual_config::ConfigError;
use thiserror::Error;

/// Errors that can occur while resolving or mapping translations
#[derive(Error, Debug)]
pub enum I18nError {
    /// No translation matched the requested language, its parents, or the default language
    #[error("No translation of {core_id} found for languages [{}]", .attempted.join(", "))]
    TranslationNotFound {
        /// Core entity that was searched
        core_id: EntityId,
        /// Language tags tried, in order
        attempted: Vec<String>,
    },

    /// A caller-supplied argument was unusable
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Argument name
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// No mapper registered for the requested type pair
    #[error("No object mapper registered for {source_type} -> {destination_type}")]
    MapperNotRegistered {
        /// Source type name
        source_type: &'static str,
        /// Destination type name
        destination_type: &'static str,
    },

    /// The operation exists in the interface but is not implemented by this mapper
    #[error("Unsupported operation: {operation}")]
    Unsupported {
        /// Description of the rejected operation
        operation: String,
    },

    /// A core entity referenced by id is not present in the index
    #[error("Entity not found: {id}")]
    EntityNotFound {
        /// Missing identifier
        id: EntityId,
    },

    /// Settings could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
