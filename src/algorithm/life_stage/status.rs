//! Reproductive status derived from a dam's event history

use chrono::{Months, NaiveDate};
use log::debug;

use crate::common::traits::AnimalLookup;
use crate::error::Result;
use crate::models::ReproductiveEvent;

/// Predicates over one female's reproductive history, computed before any
/// life-stage rule is evaluated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReproductiveStatus {
    /// Some event carries a confirmation date and a pregnant (or missing)
    /// outcome
    pub is_confirmed_pregnant: bool,
    /// Identifier and birth date of the most recent recorded birth
    pub last_birth: Option<(String, NaiveDate)>,
    /// The last birth falls within the recent-birth window
    pub had_recent_birth: bool,
    /// Some animal references the last birth event as its origin
    pub has_registered_offspring: bool,
    /// A pregnancy was confirmed on or after the last birth
    pub pregnant_after_birth: bool,
}

impl ReproductiveStatus {
    /// Status of an animal with no reproductive history
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scan `history` as of `today`.
    ///
    /// The offspring lookup only runs for a recent birth, and the
    /// pregnancy-after-birth scan only when that birth is recent and a
    /// pregnancy is confirmed.
    pub fn derive<L: AnimalLookup>(
        lookup: &L,
        history: &[ReproductiveEvent],
        today: NaiveDate,
        recent_birth_months: u32,
    ) -> Result<Self> {
        let is_confirmed_pregnant = history.iter().any(ReproductiveEvent::is_confirmed_pregnancy);

        // max_by_key keeps the last of equal keys, so ties go to the later event
        let last_birth = history
            .iter()
            .filter_map(|event| event.actual_birth_date.map(|born| (event, born)))
            .max_by_key(|(_, born)| *born)
            .map(|(event, born)| (event.id.clone(), born));

        let cutoff = today
            .checked_sub_months(Months::new(recent_birth_months))
            .unwrap_or(NaiveDate::MIN);
        let had_recent_birth = last_birth.as_ref().is_some_and(|(_, born)| *born >= cutoff);

        let mut status = Self {
            is_confirmed_pregnant,
            last_birth,
            had_recent_birth,
            ..Self::default()
        };

        if let Some((event_id, born)) = status.last_birth.as_ref().filter(|_| had_recent_birth) {
            status.has_registered_offspring = lookup.has_offspring_for_event(event_id)?;
            if is_confirmed_pregnant {
                status.pregnant_after_birth = history
                    .iter()
                    .filter_map(|event| event.confirmation_date)
                    .any(|confirmed| confirmed >= *born);
            }
        }

        debug!("Reproductive status as of {today}: {status:?}");
        Ok(status)
    }
}
