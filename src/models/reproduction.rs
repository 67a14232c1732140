//! Reproductive event model
//!
//! A `ReproductiveEvent` belongs to one dam and records a service (mating or
//! insemination) and what followed it: pregnancy confirmation, expected and
//! actual birth, and an outcome tag.

use crate::models::traits::EntityModel;
use crate::models::types::PregnancyOutcome;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// One service and its follow-up for a single dam
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReproductiveEvent {
    /// Unique identifier
    pub id: String,
    /// The female this event belongs to
    pub dam_id: String,
    /// Male used for the service, if recorded
    #[serde(default)]
    pub sire_id: Option<String>,
    /// Service or mating date
    pub service_date: NaiveDate,
    /// Date the pregnancy was confirmed
    #[serde(default)]
    pub confirmation_date: Option<NaiveDate>,
    /// Expected birth date
    #[serde(default)]
    pub expected_birth_date: Option<NaiveDate>,
    /// Actual birth date
    #[serde(default)]
    pub actual_birth_date: Option<NaiveDate>,
    /// Outcome tag
    #[serde(default)]
    pub outcome: Option<PregnancyOutcome>,
}

impl ReproductiveEvent {
    /// Record a new service for a dam
    #[must_use]
    pub fn new(id: impl Into<String>, dam_id: impl Into<String>, service_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            dam_id: dam_id.into(),
            sire_id: None,
            service_date,
            confirmation_date: None,
            expected_birth_date: None,
            actual_birth_date: None,
            outcome: None,
        }
    }

    /// Set the sire
    #[must_use]
    pub fn with_sire(mut self, sire_id: impl Into<String>) -> Self {
        self.sire_id = Some(sire_id.into());
        self
    }

    /// Record a pregnancy confirmation
    #[must_use]
    pub fn confirmed_on(mut self, date: NaiveDate) -> Self {
        self.confirmation_date = Some(date);
        self
    }

    /// Record the expected birth date
    #[must_use]
    pub fn expected_on(mut self, date: NaiveDate) -> Self {
        self.expected_birth_date = Some(date);
        self
    }

    /// Record the actual birth date
    #[must_use]
    pub fn born_on(mut self, date: NaiveDate) -> Self {
        self.actual_birth_date = Some(date);
        self
    }

    /// Set the outcome tag
    #[must_use]
    pub fn with_outcome(mut self, outcome: PregnancyOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Whether this event confirms a pregnancy that has not been ruled out
    #[must_use]
    pub fn is_confirmed_pregnancy(&self) -> bool {
        self.confirmation_date.is_some()
            && matches!(self.outcome, None | Some(PregnancyOutcome::Pregnant))
    }

    /// Recorded expected-birth date, or the service date plus `gestation_days`
    #[must_use]
    pub fn projected_birth_date(&self, gestation_days: u32) -> Option<NaiveDate> {
        self.expected_birth_date.or_else(|| {
            self.service_date
                .checked_add_days(Days::new(u64::from(gestation_days)))
        })
    }
}

impl EntityModel for ReproductiveEvent {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
