//! Multi-lingual book: a core with a price and per-language names

use crate::entity::{EntityIndex, MultiLingualObject, ObjectTranslation};
use crate::error::I18nResult;
use crate::mapping::ObjectMapper;
use multilingual_common::EntityId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Language-independent part of a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiLingualBook {
    /// Book identifier
    pub id: EntityId,
    /// Price shared by every translation
    pub price: f64,
    /// Names per language
    pub translations: Vec<MultiLingualBookTranslation>,
}

impl MultiLingualBook {
    /// A book without translations
    pub fn new(id: EntityId, price: f64) -> Self {
        Self {
            id,
            price,
            translations: Vec::new(),
        }
    }

    /// Add a translation owned by this book
    pub fn add_translation(&mut self, language: impl Into<String>, name: impl Into<String>) -> &mut Self {
        self.translations.push(MultiLingualBookTranslation {
            core_id: self.id,
            language: language.into(),
            name: name.into(),
        });
        self
    }

    /// Builder form of [`add_translation`](Self::add_translation)
    #[must_use]
    pub fn with_translation(mut self, language: impl Into<String>, name: impl Into<String>) -> Self {
        self.add_translation(language, name);
        self
    }
}

impl MultiLingualObject for MultiLingualBook {
    type Translation = MultiLingualBookTranslation;

    fn id(&self) -> EntityId {
        self.id
    }

    fn translations(&self) -> &[MultiLingualBookTranslation] {
        &self.translations
    }
}

/// A book's name in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiLingualBookTranslation {
    /// Owning book
    pub core_id: EntityId,
    /// Language tag
    pub language: String,
    /// Localized name
    pub name: String,
}

impl ObjectTranslation for MultiLingualBookTranslation {
    fn language(&self) -> &str {
        &self.language
    }

    fn core_id(&self) -> EntityId {
        self.core_id
    }
}

/// Flattened book for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiLingualBookDto {
    /// Book identifier
    pub id: EntityId,
    /// Price from the core
    pub price: f64,
    /// Name from the chosen translation
    pub name: String,
}

/// Maps a book translation to [`MultiLingualBookDto`], reading price and id from the owning book
#[derive(Debug, Clone)]
pub struct MultiLingualBookObjectMapper {
    books: Arc<EntityIndex<MultiLingualBook>>,
}

impl MultiLingualBookObjectMapper {
    /// Create a mapper looking up books in `books`
    pub const fn new(books: Arc<EntityIndex<MultiLingualBook>>) -> Self {
        Self { books }
    }
}

impl ObjectMapper<MultiLingualBookTranslation, MultiLingualBookDto> for MultiLingualBookObjectMapper {
    fn map(&self, source: &MultiLingualBookTranslation) -> I18nResult<MultiLingualBookDto> {
        let book = self.books.core_of(source)?;
        Ok(MultiLingualBookDto {
            id: book.id,
            price: book.price,
            name: source.name.clone(),
        })
    }
}
