//! Standardized model collections
//!
//! This module provides the generic keyed collection used for registry
//! models and the in-memory `AnimalRegistry` built on top of it.

pub mod registry;

pub use registry::AnimalRegistry;

use crate::common::traits::{LookupCollection, ModelCollection};
use crate::models::EntityModel;
use std::collections::HashMap;
use std::sync::Arc;

/// Generic model collection implementation
///
/// Stores models in a `HashMap` indexed by their ID.
#[derive(Debug)]
pub struct GenericCollection<T: EntityModel> {
    /// Models indexed by ID
    items: HashMap<T::Id, Arc<T>>,
}

impl<T: EntityModel> GenericCollection<T> {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Create a collection from a vector of models
    #[must_use]
    pub fn from_models(models: Vec<T>) -> Self {
        let mut collection = Self::new();
        collection.add_all(models);
        collection
    }
}

impl<T: EntityModel> Default for GenericCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EntityModel> ModelCollection<T> for GenericCollection<T> {
    fn add(&mut self, model: T) {
        let id = model.id().clone();
        self.items.insert(id, Arc::new(model));
    }

    fn get(&self, id: &T::Id) -> Option<Arc<T>> {
        self.items.get(id).cloned()
    }

    fn all(&self) -> Vec<Arc<T>> {
        self.items.values().cloned().collect()
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool,
    {
        self.items
            .values()
            .filter(|model| predicate(model))
            .cloned()
            .collect()
    }
}

impl<T: EntityModel> LookupCollection<T> for GenericCollection<T> {
    // All methods are inherited from the default implementations
}
