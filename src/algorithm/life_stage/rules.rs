//! Priority-ordered life-stage rules
//!
//! The first matching rule wins. The order is fixed: a recently calved
//! female is "Parida" whatever her age, and a confirmed pregnancy outranks
//! every age bracket.

use log::debug;

use crate::algorithm::life_stage::ReproductiveStatus;
use crate::config::LifeStageThresholds;
use crate::models::{LifeStage, Sex};

/// Evaluate the life-stage rules for one animal.
///
/// `status` is only consulted for females. Returns `None` when no rule
/// matches, which happens for animals of unspecified sex past the mature
/// threshold.
#[must_use]
pub fn evaluate(
    sex: Sex,
    age_days: i64,
    status: &ReproductiveStatus,
    thresholds: &LifeStageThresholds,
) -> Option<LifeStage> {
    let female = sex == Sex::Female;

    let stage = if sex == Sex::Male && age_days > thresholds.mature_after_days {
        Some(LifeStage::Bull)
    } else if female && status.had_recent_birth && status.has_registered_offspring {
        if status.pregnant_after_birth {
            Some(LifeStage::FreshenedPregnant)
        } else {
            Some(LifeStage::FreshenedOpen)
        }
    } else if female && status.is_confirmed_pregnant {
        Some(LifeStage::Pregnant)
    } else if age_days <= thresholds.calf_max_days {
        Some(LifeStage::Calf)
    } else if age_days <= thresholds.weaning_max_days {
        Some(by_sex(female, LifeStage::WeanedHeifer, LifeStage::WeanedSteer))
    } else if age_days <= thresholds.rearing_max_days {
        Some(by_sex(female, LifeStage::RearingHeifer, LifeStage::RearingSteer))
    } else if age_days <= thresholds.mature_after_days {
        Some(by_sex(female, LifeStage::BreedingHeifer, LifeStage::FatteningSteer))
    } else if female {
        Some(LifeStage::OpenCow)
    } else {
        None
    };

    debug!("Life-stage rules for {sex:?} aged {age_days} days: {stage:?}");
    stage
}

const fn by_sex(female: bool, female_stage: LifeStage, other: LifeStage) -> LifeStage {
    if female { female_stage } else { other }
}
