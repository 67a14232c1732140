//! Self-ancestry detection
//!
//! An animal must never be its own ancestor, but registry data does not
//! enforce it. This walk reports where the subject reappears inside the
//! bounded window so callers can flag the record.

use std::collections::BTreeSet;

use crate::common::traits::AnimalLookup;
use crate::error::{HerdbookError, Result};
use crate::models::AnimalRecord;

/// Generations (ascending, deduplicated) at which `subject_id` reappears
/// among its own ancestors, up to `max_generation`.
///
/// An empty result means the ancestry is consistent within the window.
pub fn find_self_ancestry<L: AnimalLookup>(
    lookup: &L,
    subject_id: &str,
    max_generation: u32,
) -> Result<Vec<u32>> {
    let subject = lookup
        .find_animal(subject_id)?
        .ok_or_else(|| HerdbookError::not_found(subject_id))?;

    let mut hits = BTreeSet::new();
    visit_parents(lookup, &subject, subject_id, 1, max_generation, &mut hits)?;
    Ok(hits.into_iter().collect())
}

fn visit_parents<L: AnimalLookup>(
    lookup: &L,
    animal: &AnimalRecord,
    subject_id: &str,
    generation: u32,
    max_generation: u32,
    hits: &mut BTreeSet<u32>,
) -> Result<()> {
    if generation > max_generation {
        return Ok(());
    }

    let (father, mother) = animal.parent_ids();
    for parent_id in [father, mother].into_iter().flatten() {
        if parent_id == subject_id {
            hits.insert(generation);
        }
        if let Some(parent) = lookup.find_animal(parent_id)? {
            visit_parents(lookup, &parent, subject_id, generation + 1, max_generation, hits)?;
        }
    }
    Ok(())
}
