//! Culture-aware translation resolution for multi-lingual objects
//!
//! A multi-lingual object is a core entity owning one translation per
//! language. This crate picks the best translation for a culture and maps it
//! into a presentation record. It includes:
//!
//! - Culture values with parent fallback (`en-US` → `en`)
//! - Thread-scoped and task-local current culture
//! - Translation resolution with explicit, culture, parent, and default fallbacks
//! - Object mappers and a registry keyed by type pair
//!
//! # Example
//!
//! ```rust
//! use multilingual_common::EntityId;
//! use multilingual_object::{
//!     CultureHelper, EntityIndex, MultiLingualBook, MultiLingualBookObjectMapper,
//!     MultiLingualObjectManager, ObjectMapper,
//! };
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let book = MultiLingualBook::new(EntityId::new(), 100.0)
//!     .with_translation("en", "C# in Depth")
//!     .with_translation("zh-Hans", "深入理解C#");
//! let id = book.id;
//! let books: Arc<EntityIndex<_>> = Arc::new(std::iter::once(book).collect());
//!
//! let manager = MultiLingualObjectManager::default();
//! let mapper = MultiLingualBookObjectMapper::new(Arc::clone(&books));
//!
//! let _culture = CultureHelper::use_culture("en-US")?;
//! let translation = manager.get_translation(books.require(id)?, None)?;
//! let dto = mapper.map(translation)?;
//! assert_eq!(dto.name, "C# in Depth");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod book;
pub mod culture;
pub mod entity;
pub mod error;
pub mod manager;
pub mod mapping;

pub use book::{
    MultiLingualBook, MultiLingualBookDto, MultiLingualBookObjectMapper,
    MultiLingualBookTranslation,
};
pub use culture::{current_culture, with_culture, Culture, CultureHelper, CultureScope};
pub use entity::{EntityIndex, MultiLingualObject, ObjectTranslation};
pub use error::{I18nError, I18nResult};
pub use manager::{MatchSource, MultiLingualObjectManager, TranslationMatch, TranslationRequest};
pub use mapping::{ObjectMapper, ObjectMapperRegistry, SharedMapper};
