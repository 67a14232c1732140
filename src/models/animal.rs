//! Animal entity model
//!
//! An `AnimalRecord` is one registered head of livestock. Parent links are weak
//! references by identifier: they may be absent, or point to an animal the
//! registry does not hold.

use crate::models::traits::EntityModel;
use crate::models::types::Sex;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Core animal record as held by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalRecord {
    /// Unique, stable identifier
    pub id: String,
    /// Sex of the animal
    pub sex: Sex,
    /// Birth date
    pub birth_date: NaiveDate,
    /// Father's identifier, if known
    #[serde(default)]
    pub father_id: Option<String>,
    /// Mother's identifier, if known
    #[serde(default)]
    pub mother_id: Option<String>,
    /// Reproductive event this animal was born from, if recorded
    #[serde(default)]
    pub reproduction_id: Option<String>,
    /// Last category label computed for this animal
    #[serde(default)]
    pub current_category: Option<String>,
    /// Whether the animal is still part of the herd
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl AnimalRecord {
    /// Create a new active animal with no known parents
    #[must_use]
    pub fn new(id: impl Into<String>, sex: Sex, birth_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            sex,
            birth_date,
            father_id: None,
            mother_id: None,
            reproduction_id: None,
            current_category: None,
            active: true,
        }
    }

    /// Set the father identifier
    #[must_use]
    pub fn with_father(mut self, father_id: impl Into<String>) -> Self {
        self.father_id = Some(father_id.into());
        self
    }

    /// Set the mother identifier
    #[must_use]
    pub fn with_mother(mut self, mother_id: impl Into<String>) -> Self {
        self.mother_id = Some(mother_id.into());
        self
    }

    /// Link this animal to the reproductive event it was born from
    #[must_use]
    pub fn with_reproduction(mut self, reproduction_id: impl Into<String>) -> Self {
        self.reproduction_id = Some(reproduction_id.into());
        self
    }

    /// Set the stored category label
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.current_category = Some(category.into());
        self
    }

    /// Whole days between birth and `reference_date`.
    ///
    /// Negative when the birth date lies after the reference date.
    #[must_use]
    pub fn age_days_at(&self, reference_date: &NaiveDate) -> i64 {
        (*reference_date - self.birth_date).num_days()
    }

    /// Father and mother identifiers, in that order
    #[must_use]
    pub fn parent_ids(&self) -> (Option<&str>, Option<&str>) {
        (self.father_id.as_deref(), self.mother_id.as_deref())
    }
}

impl EntityModel for AnimalRecord {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
