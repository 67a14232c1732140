//! Registry lookup seam
//!
//! The herdbook core never owns animal data; it reads it through this trait.
//! Implementations may be backed by a database, a file snapshot or the
//! in-memory `AnimalRegistry`.

use crate::error::Result;
use crate::models::{AnimalRecord, ReproductiveEvent};

/// Read access to the animal registry
///
/// Every method returns `Result` so a failing backing store surfaces as an
/// error; an unknown identifier is `Ok(None)` (or an empty list), not an error.
pub trait AnimalLookup: Send + Sync {
    /// Find an animal by identifier
    fn find_animal(&self, id: &str) -> Result<Option<AnimalRecord>>;

    /// Reproductive events of a dam in chronological order
    fn find_reproductive_events_for_dam(&self, animal_id: &str) -> Result<Vec<ReproductiveEvent>>;

    /// Animals whose reproduction back-reference equals `event_id`
    fn find_offspring_by_event(&self, event_id: &str) -> Result<Vec<AnimalRecord>>;

    /// Whether at least one registered animal was born from `event_id`
    fn has_offspring_for_event(&self, event_id: &str) -> Result<bool> {
        Ok(!self.find_offspring_by_event(event_id)?.is_empty())
    }
}

impl<L: AnimalLookup + ?Sized> AnimalLookup for &L {
    fn find_animal(&self, id: &str) -> Result<Option<AnimalRecord>> {
        (**self).find_animal(id)
    }

    fn find_reproductive_events_for_dam(&self, animal_id: &str) -> Result<Vec<ReproductiveEvent>> {
        (**self).find_reproductive_events_for_dam(animal_id)
    }

    fn find_offspring_by_event(&self, event_id: &str) -> Result<Vec<AnimalRecord>> {
        (**self).find_offspring_by_event(event_id)
    }

    fn has_offspring_for_event(&self, event_id: &str) -> Result<bool> {
        (**self).has_offspring_for_event(event_id)
    }
}
