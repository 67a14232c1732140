//! Consanguinity estimate
//!
//! A simplified inbreeding proxy: every ancestor reachable through more than
//! one path within the generation window contributes `1 / 2^(g + 1)`, where
//! `g` is the closest generation at which it appears. The sum is reported as
//! a percentage. This is not Wright's coefficient of inbreeding and must not
//! be "corrected" towards it; downstream reports depend on these numbers.

use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use rustc_hash::FxHashMap;

use crate::common::traits::AnimalLookup;
use crate::error::{HerdbookError, Result};
use crate::models::AnimalRecord;

/// Occurrences of one identifier in the ancestor walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CensusEntry {
    /// Smallest generation at which the identifier was reached
    pub min_generation: u32,
    /// Number of positions at which it was reached
    pub occurrences: u32,
}

/// Every identifier reached by the ancestor walk, subject included at
/// generation 0
#[derive(Debug, Clone, Default)]
pub struct AncestorCensus {
    entries: FxHashMap<String, CensusEntry>,
}

impl AncestorCensus {
    /// Record one visit of `id` at `generation`
    pub fn record(&mut self, id: &str, generation: u32) {
        self.entries
            .entry(id.to_string())
            .and_modify(|entry| {
                entry.min_generation = entry.min_generation.min(generation);
                entry.occurrences += 1;
            })
            .or_insert(CensusEntry {
                min_generation: generation,
                occurrences: 1,
            });
    }

    /// Entry for an identifier, if it was reached
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CensusEntry> {
        self.entries.get(id)
    }

    /// Number of distinct identifiers reached
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifiers reached through more than one path
    pub fn duplicated(&self) -> impl Iterator<Item = (&str, &CensusEntry)> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.occurrences > 1)
            .map(|(id, entry)| (id.as_str(), entry))
    }

    /// Identifiers reached exactly once
    pub fn unique(&self) -> impl Iterator<Item = (&str, &CensusEntry)> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.occurrences == 1)
            .map(|(id, entry)| (id.as_str(), entry))
    }

    /// Sum of `1 / 2^(g + 1)` over duplicated identifiers, as a percentage
    /// rounded to `decimal_places`
    #[must_use]
    pub fn score(&self, decimal_places: u32) -> Decimal {
        let raw: Decimal = self
            .duplicated()
            .map(|(_, entry)| path_weight(entry.min_generation))
            .sum();
        (raw * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// `1 / 2^(generation + 1)`; underflows to zero for very deep generations
fn path_weight(generation: u32) -> Decimal {
    let half = Decimal::new(5, 1);
    let mut weight = half;
    for _ in 0..generation {
        weight *= half;
    }
    weight
}

/// Estimates consanguinity from registry ancestry
#[derive(Debug, Clone)]
pub struct ConsanguinityEstimator<L: AnimalLookup> {
    lookup: L,
    decimal_places: u32,
}

impl<L: AnimalLookup> ConsanguinityEstimator<L> {
    /// Create an estimator reporting two decimal places
    #[must_use]
    pub const fn new(lookup: L) -> Self {
        Self {
            lookup,
            decimal_places: 2,
        }
    }

    /// Change the number of decimal places reported
    #[must_use]
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Walk the ancestry of `animal_id` and record every identifier reached
    /// up to `max_generation`.
    ///
    /// Ancestors the registry does not hold are not recorded. An unknown
    /// subject is a `NotFound` error.
    pub fn census(&self, animal_id: &str, max_generation: u32) -> Result<AncestorCensus> {
        let subject = self
            .lookup
            .find_animal(animal_id)?
            .ok_or_else(|| HerdbookError::not_found(animal_id))?;

        let mut census = AncestorCensus::default();
        self.visit(&subject, 0, max_generation, &mut census)?;
        Ok(census)
    }

    fn visit(
        &self,
        animal: &AnimalRecord,
        generation: u32,
        max_generation: u32,
        census: &mut AncestorCensus,
    ) -> Result<()> {
        census.record(&animal.id, generation);
        if generation >= max_generation {
            return Ok(());
        }

        let (father, mother) = animal.parent_ids();
        for parent_id in [father, mother].into_iter().flatten() {
            if let Some(parent) = self.lookup.find_animal(parent_id)? {
                self.visit(&parent, generation + 1, max_generation, census)?;
            }
        }
        Ok(())
    }

    /// Consanguinity estimate of `animal_id` as a percentage in `[0, 100]`
    pub fn estimate(&self, animal_id: &str, max_generation: u32) -> Result<Decimal> {
        let census = self.census(animal_id, max_generation)?;
        let estimate = census.score(self.decimal_places);
        debug!(
            "Consanguinity of {animal_id}: {estimate}% from {} shared of {} ancestors",
            census.duplicated().count(),
            census.len()
        );
        Ok(estimate)
    }
}
