//! In-memory animal registry
//!
//! Holds a snapshot of animal records and reproductive events and answers the
//! `AnimalLookup` queries from secondary indexes built once at construction.

use std::collections::HashMap;
use std::sync::Arc;

use itertools::Itertools;

use crate::collections::GenericCollection;
use crate::common::traits::{AnimalLookup, LookupCollection, ModelCollection};
use crate::error::Result;
use crate::models::{AnimalRecord, ReproductiveEvent};

/// Registry snapshot with lookups by identifier, dam and birth event
#[derive(Debug, Default)]
pub struct AnimalRegistry {
    animals: GenericCollection<AnimalRecord>,
    events: GenericCollection<ReproductiveEvent>,
    /// Events per dam, ordered by service date then identifier
    events_by_dam: HashMap<String, Vec<Arc<ReproductiveEvent>>>,
    /// Animals per reproduction back-reference
    offspring_by_event: HashMap<String, Vec<Arc<AnimalRecord>>>,
}

impl AnimalRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from animal and event records
    #[must_use]
    pub fn from_records(animals: Vec<AnimalRecord>, events: Vec<ReproductiveEvent>) -> Self {
        let mut registry = Self {
            animals: GenericCollection::from_models(animals),
            events: GenericCollection::from_models(events),
            events_by_dam: HashMap::new(),
            offspring_by_event: HashMap::new(),
        };
        registry.rebuild_indexes();
        registry
    }

    /// Add or replace an animal
    pub fn insert_animal(&mut self, animal: AnimalRecord) {
        self.animals.add(animal);
        self.rebuild_indexes();
    }

    /// Add or replace a reproductive event
    pub fn insert_event(&mut self, event: ReproductiveEvent) {
        self.events.add(event);
        self.rebuild_indexes();
    }

    /// Number of animals held
    #[must_use]
    pub fn animal_count(&self) -> usize {
        self.animals.count()
    }

    /// Number of reproductive events held
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.count()
    }

    /// All animals, ordered by identifier
    #[must_use]
    pub fn animals(&self) -> Vec<Arc<AnimalRecord>> {
        self.animals
            .all()
            .into_iter()
            .sorted_by(|a, b| a.id.cmp(&b.id))
            .collect()
    }

    fn rebuild_indexes(&mut self) {
        let mut events_by_dam = self
            .events
            .create_multi_lookup(|event| Some(event.dam_id.clone()));
        for history in events_by_dam.values_mut() {
            history.sort_by(|a, b| {
                a.service_date
                    .cmp(&b.service_date)
                    .then_with(|| a.id.cmp(&b.id))
            });
        }
        self.events_by_dam = events_by_dam;

        let mut offspring_by_event = self
            .animals
            .create_multi_lookup(|animal| animal.reproduction_id.clone());
        for offspring in offspring_by_event.values_mut() {
            offspring.sort_by(|a, b| a.id.cmp(&b.id));
        }
        self.offspring_by_event = offspring_by_event;
    }
}

impl AnimalLookup for AnimalRegistry {
    fn find_animal(&self, id: &str) -> Result<Option<AnimalRecord>> {
        Ok(self.animals.get(&id.to_string()).map(|a| (*a).clone()))
    }

    fn find_reproductive_events_for_dam(&self, animal_id: &str) -> Result<Vec<ReproductiveEvent>> {
        Ok(self
            .events_by_dam
            .get(animal_id)
            .map(|history| history.iter().map(|e| (**e).clone()).collect())
            .unwrap_or_default())
    }

    fn find_offspring_by_event(&self, event_id: &str) -> Result<Vec<AnimalRecord>> {
        Ok(self
            .offspring_by_event
            .get(event_id)
            .map(|offspring| offspring.iter().map(|a| (**a).clone()).collect())
            .unwrap_or_default())
    }

    fn has_offspring_for_event(&self, event_id: &str) -> Result<bool> {
        Ok(self
            .offspring_by_event
            .get(event_id)
            .is_some_and(|offspring| !offspring.is_empty()))
    }
}
