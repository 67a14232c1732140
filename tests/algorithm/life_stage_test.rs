//! Scenario tests for the life-stage classifier
//!
//! All scenarios classify as of `reference_date()`.

use chrono::Days;
use herdbook::config::LifeStageThresholds;
use herdbook::{
    AnimalLookup, AnimalRecord, AnimalRegistry, LifeStage, LifeStageClassifier, PregnancyOutcome,
    ReproductiveEvent, Sex,
};

use crate::utils::{FailingLookup, calved_dam_registry, date, days_ago, reference_date};

fn classifier(registry: &AnimalRegistry) -> LifeStageClassifier<&AnimalRegistry> {
    LifeStageClassifier::new(registry, LifeStageThresholds::default())
}

fn classify_in(registry: &AnimalRegistry, animal: &AnimalRecord) -> String {
    let history = registry.find_reproductive_events_for_dam(&animal.id).unwrap();
    classifier(registry).classify(animal, &history, reference_date())
}

#[test]
fn test_mature_male_is_bull() {
    let registry = AnimalRegistry::new();
    let bull = AnimalRecord::new("B", Sex::Male, days_ago(1200));
    assert_eq!(classify_in(&registry, &bull), "Toro");
}

#[test]
fn test_young_female_without_events() {
    let registry = AnimalRegistry::new();
    let heifer = AnimalRecord::new("H", Sex::Female, days_ago(300));
    assert_eq!(classify_in(&registry, &heifer), "Novillas destete");
}

#[test]
fn test_calf_boundary() {
    let registry = AnimalRegistry::new();
    let at_240 = AnimalRecord::new("C1", Sex::Male, days_ago(240));
    let at_241 = AnimalRecord::new("C2", Sex::Male, days_ago(241));
    assert_eq!(classify_in(&registry, &at_240), "Becerro");
    assert_eq!(classify_in(&registry, &at_241), "Novillos destete");
}

#[test]
fn test_future_birth_date_is_calf() {
    let registry = AnimalRegistry::new();
    let unborn = AnimalRecord::new("U", Sex::Female, reference_date() + Days::new(10));
    assert_eq!(classify_in(&registry, &unborn), "Becerro");
}

#[test]
fn test_recently_calved_mature_female_is_freshened_open() {
    let (registry, dam) = calved_dam_registry(1090, 60, true, vec![]);
    let label = classify_in(&registry, &dam);
    assert_eq!(label, "Parida vacía");
    assert_ne!(label, "Vacía");
    assert_ne!(label, "Toro");
}

#[test]
fn test_pregnant_again_after_calving() {
    let rebred = ReproductiveEvent::new("ER", "DAM", days_ago(40))
        .with_sire("B")
        .confirmed_on(days_ago(5))
        .with_outcome(PregnancyOutcome::Pregnant);
    let (registry, dam) = calved_dam_registry(1500, 90, true, vec![rebred]);
    assert_eq!(classify_in(&registry, &dam), "Parida preñada");
}

#[test]
fn test_unregistered_calf_does_not_freshen() {
    let (registry, dam) = calved_dam_registry(1500, 60, false, vec![]);
    assert_eq!(classify_in(&registry, &dam), "Vacía");
}

#[test]
fn test_old_birth_is_not_recent() {
    let (registry, dam) = calved_dam_registry(1500, 300, true, vec![]);
    assert_eq!(classify_in(&registry, &dam), "Vacía");
}

#[test]
fn test_confirmed_pregnancy_regardless_of_age() {
    let registry = AnimalRegistry::new();
    for age in [200, 500, 900, 2500] {
        let female = AnimalRecord::new("P", Sex::Female, days_ago(age));
        let history = [ReproductiveEvent::new("E1", "P", days_ago(60)).confirmed_on(days_ago(20))];
        assert_eq!(
            classifier(&registry).classify(&female, &history, reference_date()),
            "Preñada",
            "age {age}"
        );
    }
}

#[test]
fn test_abortion_is_not_pregnancy() {
    let registry = AnimalRegistry::new();
    let female = AnimalRecord::new("P", Sex::Female, days_ago(900));
    let history = [ReproductiveEvent::new("E1", "P", days_ago(150))
        .confirmed_on(days_ago(110))
        .with_outcome(PregnancyOutcome::Abortion)];
    assert_eq!(
        classifier(&registry).classify(&female, &history, reference_date()),
        "Novillas vientre"
    );
}

#[test]
fn test_classifier_is_deterministic() {
    let rebred = ReproductiveEvent::new("ER", "DAM", days_ago(40)).confirmed_on(days_ago(5));
    let (registry, dam) = calved_dam_registry(1200, 100, true, vec![rebred]);
    let history = registry.find_reproductive_events_for_dam("DAM").unwrap();
    let classifier = classifier(&registry);

    let first = classifier.classify(&dam, &history, reference_date());
    let second = classifier.classify(&dam, &history, reference_date());
    assert_eq!(first, second);
    assert_eq!(LifeStage::from_label(&first), Some(LifeStage::FreshenedPregnant));
}

#[test]
fn test_unspecified_sex_keeps_stored_category() {
    let registry = AnimalRegistry::new();
    let unknown = AnimalRecord::new("Q", Sex::Unspecified, date(2010, 1, 1)).with_category("Vacía");
    assert_eq!(classify_in(&registry, &unknown), "Vacía");

    let blank = AnimalRecord::new("R", Sex::Unspecified, date(2010, 1, 1));
    assert_eq!(classify_in(&registry, &blank), "");
}

#[test]
fn test_registry_failure_returns_previous_category() {
    let classifier = LifeStageClassifier::new(FailingLookup, LifeStageThresholds::default());
    let cow = AnimalRecord::new("C", Sex::Female, days_ago(2000)).with_category("Parida vacía");
    assert_eq!(
        classifier.classify_from_registry(&cow, reference_date()),
        "Parida vacía"
    );
}

#[test]
fn test_custom_thresholds() {
    let registry = AnimalRegistry::new();
    let thresholds = LifeStageThresholds {
        calf_max_days: 180,
        ..LifeStageThresholds::default()
    };
    let classifier = LifeStageClassifier::new(&registry, thresholds);
    let calf = AnimalRecord::new("C", Sex::Female, days_ago(200));
    assert_eq!(classifier.classify(&calf, &[], reference_date()), "Novillas destete");
}
