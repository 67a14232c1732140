//! Life-stage classifier
//!
//! Derives the production category of an animal from its age, sex and
//! reproductive history. The category is recomputed from scratch on every
//! call; the stored value is only used as the fallback.
//!
//! Classification is best-effort: a failing registry lookup is logged and the
//! previously stored category is returned instead of an error.

use chrono::NaiveDate;
use log::warn;

use crate::algorithm::life_stage::{ReproductiveStatus, rules};
use crate::common::traits::AnimalLookup;
use crate::config::LifeStageThresholds;
use crate::error::Result;
use crate::models::{AnimalRecord, LifeStage, ReproductiveEvent, Sex};

/// Classifies animals into life stages
#[derive(Debug, Clone)]
pub struct LifeStageClassifier<L: AnimalLookup> {
    lookup: L,
    thresholds: LifeStageThresholds,
}

impl<L: AnimalLookup> LifeStageClassifier<L> {
    /// Create a classifier with the given thresholds
    #[must_use]
    pub const fn new(lookup: L, thresholds: LifeStageThresholds) -> Self {
        Self { lookup, thresholds }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &LifeStageThresholds {
        &self.thresholds
    }

    /// Evaluate the rules for `animal` against `history` as of `today`.
    ///
    /// `Ok(None)` means no rule matched. Lookup failures are returned.
    pub fn try_classify(
        &self,
        animal: &AnimalRecord,
        history: &[ReproductiveEvent],
        today: NaiveDate,
    ) -> Result<Option<LifeStage>> {
        let age_days = animal.age_days_at(&today);
        if age_days < 0 {
            warn!(
                "Animal {} has birth date {} after reference date {today}",
                animal.id, animal.birth_date
            );
        }

        let status = if animal.sex == Sex::Female {
            ReproductiveStatus::derive(
                &self.lookup,
                history,
                today,
                self.thresholds.recent_birth_months,
            )?
        } else {
            ReproductiveStatus::empty()
        };

        Ok(rules::evaluate(animal.sex, age_days, &status, &self.thresholds))
    }

    /// Category label for `animal`, falling back to its stored category
    /// (or an empty label) when no rule matches or a lookup fails
    #[must_use]
    pub fn classify(
        &self,
        animal: &AnimalRecord,
        history: &[ReproductiveEvent],
        today: NaiveDate,
    ) -> String {
        self.label_or_previous(animal, self.try_classify(animal, history, today))
    }

    /// Like [`classify`](Self::classify), reading the reproductive history of
    /// female animals from the registry
    #[must_use]
    pub fn classify_from_registry(&self, animal: &AnimalRecord, today: NaiveDate) -> String {
        let outcome = self
            .history_for(animal)
            .and_then(|history| self.try_classify(animal, &history, today));
        self.label_or_previous(animal, outcome)
    }

    fn history_for(&self, animal: &AnimalRecord) -> Result<Vec<ReproductiveEvent>> {
        if animal.sex == Sex::Female {
            self.lookup.find_reproductive_events_for_dam(&animal.id)
        } else {
            Ok(Vec::new())
        }
    }

    fn label_or_previous(&self, animal: &AnimalRecord, outcome: Result<Option<LifeStage>>) -> String {
        let previous = || animal.current_category.clone().unwrap_or_default();
        match outcome {
            Ok(Some(stage)) => stage.label().to_string(),
            Ok(None) => previous(),
            Err(e) => {
                warn!(
                    "Life-stage classification failed for {}, keeping previous category: {e}",
                    animal.id
                );
                previous()
            }
        }
    }
}
