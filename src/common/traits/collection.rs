//! Standardized collection traits
//!
//! This module defines traits for keyed collections of registry models,
//! covering adding, getting, filtering and building secondary lookups.

use crate::models::traits::EntityModel;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Core trait for model collections
pub trait ModelCollection<T: EntityModel>: Send + Sync + std::fmt::Debug {
    /// Add a model to the collection, replacing any model with the same ID
    fn add(&mut self, model: T);

    /// Get a model by its identifier
    fn get(&self, id: &T::Id) -> Option<Arc<T>>;

    /// Get all models in the collection
    fn all(&self) -> Vec<Arc<T>>;

    /// Count the total number of models in the collection
    fn count(&self) -> usize;

    /// Filter models by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool;

    /// Check if the collection contains a model with the given ID
    fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Add multiple models to the collection
    fn add_all(&mut self, models: Vec<T>) {
        for model in models {
            self.add(model);
        }
    }
}

/// Trait for creating lookups from collections
pub trait LookupCollection<T: EntityModel>: ModelCollection<T> {
    /// Create a lookup map with several models per key; models without a key
    /// are left out
    fn create_multi_lookup<K, F>(&self, key_fn: F) -> HashMap<K, Vec<Arc<T>>>
    where
        K: Eq + Hash,
        F: Fn(&T) -> Option<K>,
    {
        let mut lookup: HashMap<K, Vec<Arc<T>>> = HashMap::new();
        for model in self.all() {
            if let Some(key) = key_fn(&model) {
                lookup.entry(key).or_default().push(model);
            }
        }
        lookup
    }
}
