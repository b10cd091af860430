//! Multi-lingual entity model
//!
//! A core entity owns its translations. A translation refers back to its core
//! by identifier only; the core itself is found through an [`EntityIndex`].

use crate::error::{I18nError, I18nResult};
use multilingual_common::EntityId;
use std::collections::HashMap;

/// One language-specific projection of a core entity
pub trait ObjectTranslation {
    /// Language tag of this translation, e.g. `zh-Hans`
    fn language(&self) -> &str;

    /// Identifier of the owning core entity
    fn core_id(&self) -> EntityId;
}

/// A core entity with per-language translations
pub trait MultiLingualObject {
    /// Translation record type
    type Translation: ObjectTranslation;

    /// Identifier of this entity
    fn id(&self) -> EntityId;

    /// Owned translations in insertion order
    fn translations(&self) -> &[Self::Translation];
}

/// Lookup of core entities by identifier
#[derive(Debug, Clone)]
pub struct EntityIndex<C> {
    entities: HashMap<EntityId, C>,
}

impl<C> Default for EntityIndex<C> {
    fn default() -> Self {
        Self {
            entities: HashMap::new(),
        }
    }
}

impl<C: MultiLingualObject> EntityIndex<C> {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity, returning the one it replaced
    pub fn insert(&mut self, entity: C) -> Option<C> {
        self.entities.insert(entity.id(), entity)
    }

    /// Look up an entity by id
    pub fn get(&self, id: EntityId) -> Option<&C> {
        self.entities.get(&id)
    }

    /// Look up an entity by id, failing with [`I18nError::EntityNotFound`]
    pub fn require(&self, id: EntityId) -> I18nResult<&C> {
        self.get(id).ok_or(I18nError::EntityNotFound { id })
    }

    /// The core entity owning `translation`
    pub fn core_of<T: ObjectTranslation>(&self, translation: &T) -> I18nResult<&C> {
        self.require(translation.core_id())
    }

    /// Remove an entity
    pub fn remove(&mut self, id: EntityId) -> Option<C> {
        self.entities.remove(&id)
    }

    /// Number of indexed entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the index holds no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over all entities in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.entities.values()
    }
}

impl<C: MultiLingualObject> FromIterator<C> for EntityIndex<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut index = Self::new();
        for entity in iter {
            index.insert(entity);
        }
        index
    }
}

impl<C: MultiLingualObject> Extend<C> for EntityIndex<C> {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        for entity in iter {
            self.insert(entity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::MultiLingualBook;
    use multilingual_common::test_utils::fixed_entity_id;

    fn book(n: u128) -> MultiLingualBook {
        MultiLingualBook::new(fixed_entity_id(n), 1.0).with_translation("en", format!("book-{n}"))
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let mut index = EntityIndex::new();
        assert!(index.insert(book(1)).is_none());

        let replaced = index.insert(MultiLingualBook::new(fixed_entity_id(1), 2.0));
        assert_eq!(replaced.unwrap().price, 1.0);
        assert_eq!(index.len(), 1);
        assert_eq!(index.require(fixed_entity_id(1)).unwrap().price, 2.0);
    }

    #[test]
    fn test_core_of_and_remove() {
        let mut index: EntityIndex<_> = (1..=2).map(book).collect();
        let translation = index.require(fixed_entity_id(2)).unwrap().translations[0].clone();
        assert_eq!(index.core_of(&translation).unwrap().id, fixed_entity_id(2));

        let removed = index.remove(fixed_entity_id(2)).unwrap();
        assert_eq!(removed.id, fixed_entity_id(2));
        assert!(index.remove(fixed_entity_id(2)).is_none());
        assert!(matches!(
            index.core_of(&translation),
            Err(I18nError::EntityNotFound { id }) if id == fixed_entity_id(2)
        ));
    }

    #[test]
    fn test_extend_and_iter() {
        let mut index = EntityIndex::new();
        assert!(index.is_empty());
        index.extend((1..=3).map(book));
        index.extend(std::iter::once(book(2)));

        let mut ids: Vec<_> = index.iter().map(|b| b.id).collect();
        ids.sort();
        assert_eq!(ids, vec![fixed_entity_id(1), fixed_entity_id(2), fixed_entity_id(3)]);
        assert!(index.get(fixed_entity_id(4)).is_none());
    }
}
