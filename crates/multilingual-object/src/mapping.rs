//! Object mapping between typed records
//!
//! Mappers are plain trait implementations. The [`ObjectMapperRegistry`] only
//! exists for callers that pick a mapper by its `(source, destination)` type
//! pair at runtime.

use crate::error::{I18nError, I18nResult};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Maps a source record of type `S` into a destination of type `D`
pub trait ObjectMapper<S, D> {
    /// Produce a fresh destination from `source`
    fn map(&self, source: &S) -> I18nResult<D>;

    /// Merge `source` into an existing destination.
    ///
    /// Unsupported unless a mapper overrides it.
    fn map_into(&self, _source: &S, _destination: &mut D) -> I18nResult<()> {
        Err(I18nError::Unsupported {
            operation: format!("map_into {} -> {}", type_name::<S>(), type_name::<D>()),
        })
    }
}

/// A registered mapper, shareable across threads
pub type SharedMapper<S, D> = Arc<dyn ObjectMapper<S, D> + Send + Sync>;

/// Mappers keyed by their `(source, destination)` type pair
#[derive(Default)]
pub struct ObjectMapperRegistry {
    mappers: HashMap<(TypeId, TypeId), Box<dyn Any + Send + Sync>>,
}

impl fmt::Debug for ObjectMapperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectMapperRegistry")
            .field("mappers", &self.mappers.len())
            .finish()
    }
}

impl ObjectMapperRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `mapper` for `S -> D`, returning `true` if it replaced an earlier one
    pub fn register<S, D, M>(&mut self, mapper: M) -> bool
    where
        S: 'static,
        D: 'static,
        M: ObjectMapper<S, D> + Send + Sync + 'static,
    {
        let shared: SharedMapper<S, D> = Arc::new(mapper);
        let replaced = self
            .mappers
            .insert(Self::key::<S, D>(), Box::new(shared))
            .is_some();
        debug!(
            source = type_name::<S>(),
            destination = type_name::<D>(),
            replaced,
            "Registered object mapper"
        );
        replaced
    }

    /// Whether a mapper exists for `S -> D`
    pub fn contains<S: 'static, D: 'static>(&self) -> bool {
        self.mappers.contains_key(&Self::key::<S, D>())
    }

    /// The mapper registered for `S -> D`
    pub fn get<S: 'static, D: 'static>(&self) -> I18nResult<SharedMapper<S, D>> {
        self.mappers
            .get(&Self::key::<S, D>())
            .and_then(|mapper| mapper.downcast_ref::<SharedMapper<S, D>>())
            .cloned()
            .ok_or(I18nError::MapperNotRegistered {
                source_type: type_name::<S>(),
                destination_type: type_name::<D>(),
            })
    }

    /// Map `source` with the registered `S -> D` mapper
    pub fn map<S: 'static, D: 'static>(&self, source: &S) -> I18nResult<D> {
        self.get::<S, D>()?.map(source)
    }

    /// Merge `source` into `destination` with the registered `S -> D` mapper
    pub fn map_into<S: 'static, D: 'static>(&self, source: &S, destination: &mut D) -> I18nResult<()> {
        self.get::<S, D>()?.map_into(source, destination)
    }

    /// Number of registered mappers
    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    /// Whether no mapper is registered
    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }

    fn key<S: 'static, D: 'static>() -> (TypeId, TypeId) {
        (TypeId::of::<S>(), TypeId::of::<D>())
    }
}
