//! Herdbook query service
//!
//! The entry points consumed by report endpoints and by the animal write
//! path: pedigree and consanguinity queries plus classify-and-cache.

use std::time::Instant;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use log::info;
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::algorithm::life_stage::LifeStageClassifier;
use crate::algorithm::pedigree::{ConsanguinityEstimator, PedigreeWalker};
use crate::common::traits::AnimalLookup;
use crate::config::HerdbookConfig;
use crate::error::{HerdbookError, Result};
use crate::models::{AnimalRecord, PedigreeTree};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Result of a consanguinity query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsanguinityReport {
    /// Subject of the estimate
    pub subject_id: String,
    /// Estimate as a percentage
    pub estimate: Decimal,
    /// When the estimate was computed
    pub computed_at: DateTime<Utc>,
}

/// Category change produced by a herd reclassification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryChange {
    /// Animal identifier
    pub id: String,
    /// Category before reclassification
    pub previous: Option<String>,
    /// Category after reclassification
    pub current: String,
}

/// Pedigree, consanguinity and life-stage queries over one registry
#[derive(Debug, Clone)]
pub struct HerdbookService<L: AnimalLookup> {
    lookup: L,
    config: HerdbookConfig,
}

impl<L: AnimalLookup> HerdbookService<L> {
    /// Create a service with the default configuration
    #[must_use]
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            config: HerdbookConfig::default(),
        }
    }

    /// Create a service with a specific configuration; the configuration is
    /// validated first
    pub fn with_config(lookup: L, config: HerdbookConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { lookup, config })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &HerdbookConfig {
        &self.config
    }

    /// Registry lookup in use
    #[must_use]
    pub const fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Genealogy of `subject_id` with ancestors up to `depth` generations
    pub fn pedigree(&self, subject_id: &str, depth: u32) -> Result<PedigreeTree> {
        let bounds = &self.config.pedigree;
        if !(bounds.min_depth..=bounds.max_depth).contains(&depth) {
            return Err(HerdbookError::InvalidDepth {
                depth,
                min: bounds.min_depth,
                max: bounds.max_depth,
            });
        }

        let start = Instant::now();
        log_operation_start("Building pedigree for", subject_id);
        let tree = PedigreeWalker::new(&self.lookup)
            .with_parallel_subtrees(bounds.parallel_subtrees)
            .genealogy(subject_id, depth)?;
        log_operation_complete(
            "built pedigree for",
            subject_id,
            tree.known_ancestor_count(),
            Some(start.elapsed()),
        );
        Ok(tree)
    }

    /// Genealogy of `subject_id` at the configured default depth
    pub fn default_pedigree(&self, subject_id: &str) -> Result<PedigreeTree> {
        self.pedigree(subject_id, self.config.pedigree.default_depth)
    }

    /// Consanguinity estimate of `subject_id`
    pub fn consanguinity(&self, subject_id: &str) -> Result<ConsanguinityReport> {
        let settings = &self.config.consanguinity;

        let census = ConsanguinityEstimator::new(&self.lookup)
            .census(subject_id, settings.max_generation)?;
        if let Some(entry) = census.get(subject_id).filter(|e| e.occurrences > 1) {
            log_warning(
                &format!(
                    "Animal is its own ancestor ({} repeat occurrences)",
                    entry.occurrences - 1
                ),
                Some(&subject_id as &dyn std::fmt::Display),
            );
        }

        let estimate = census.score(settings.decimal_places);
        info!("Consanguinity of {subject_id}: {estimate}%");

        Ok(ConsanguinityReport {
            subject_id: subject_id.to_string(),
            estimate,
            computed_at: Utc::now(),
        })
    }

    /// Consanguinity of every listed subject; failures are reported per subject
    pub fn consanguinity_for_herd<S>(&self, subject_ids: &[S]) -> Vec<Result<ConsanguinityReport>>
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        log_operation_start("Estimating consanguinity for herd of", subject_ids.len());
        let reports: Vec<_> = subject_ids
            .par_iter()
            .map(|id| self.consanguinity(id.as_ref()))
            .collect();
        let failed = reports.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            log_warning(&format!("{failed} consanguinity estimates failed"), None);
        }
        log_operation_complete(
            "estimated consanguinity for",
            "herd",
            reports.len() - failed,
            Some(start.elapsed()),
        );
        reports
    }

    /// Projected calving date of the dam's earliest pending pregnancy
    ///
    /// Pending means confirmed, not ruled out, and without a recorded birth.
    /// Events with no expected-birth date are projected from the service
    /// date and the configured gestation length.
    pub fn expected_calving(&self, dam_id: &str) -> Result<Option<NaiveDate>> {
        if self.lookup.find_animal(dam_id)?.is_none() {
            return Err(HerdbookError::not_found(dam_id));
        }

        let gestation_days = self.config.life_stage.gestation_days;
        let projected = self
            .lookup
            .find_reproductive_events_for_dam(dam_id)?
            .iter()
            .filter(|event| event.is_confirmed_pregnancy() && event.actual_birth_date.is_none())
            .filter_map(|event| event.projected_birth_date(gestation_days))
            .min();
        Ok(projected)
    }

    /// Classify `animal` as of now and store the label on the record
    pub fn classify_and_cache(&self, animal: &mut AnimalRecord) -> String {
        self.classify_and_cache_at(animal, Local::now().naive_local())
    }

    /// Classify `animal` as of `at` (time of day ignored) and store the
    /// label on the record
    pub fn classify_and_cache_at(&self, animal: &mut AnimalRecord, at: NaiveDateTime) -> String {
        let label = self.classify_on(animal, at.date());
        animal.current_category = (!label.is_empty()).then(|| label.clone());
        label
    }

    fn classify_on(&self, animal: &AnimalRecord, today: NaiveDate) -> String {
        LifeStageClassifier::new(&self.lookup, self.config.life_stage.clone())
            .classify_from_registry(animal, today)
    }

    /// Reclassify every active record as of `at` and return the records
    /// whose category changed
    pub fn reclassify_herd(
        &self,
        animals: &mut [AnimalRecord],
        at: NaiveDateTime,
    ) -> Vec<CategoryChange> {
        let start = Instant::now();
        let today = at.date();
        log_operation_start("Reclassifying herd as of", today);

        let labels: Vec<Option<String>> = animals
            .par_iter()
            .map(|animal| animal.active.then(|| self.classify_on(animal, today)))
            .collect();

        let mut changes = Vec::new();
        for (animal, label) in animals.iter_mut().zip(labels) {
            let Some(current) = label else {
                continue;
            };
            let previous = animal.current_category.clone();
            if previous.as_deref().unwrap_or_default() != current {
                animal.current_category = (!current.is_empty()).then(|| current.clone());
                changes.push(CategoryChange {
                    id: animal.id.clone(),
                    previous,
                    current,
                });
            }
        }

        log_operation_complete("reclassified", "herd", changes.len(), Some(start.elapsed()));
        changes
    }
}
