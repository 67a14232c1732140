//! Tests for the consanguinity estimator

use std::str::FromStr;

use herdbook::{AnimalRegistry, ConsanguinityEstimator, Sex, find_self_ancestry};
use rust_decimal::Decimal;

use crate::utils::{FailingLookup, animal, half_sib_registry, outbred_registry, random_herd};

fn pct(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn test_outbred_animal_scores_zero() {
    let registry = outbred_registry("X", 5);
    let estimate = ConsanguinityEstimator::new(&registry).estimate("X", 5).unwrap();
    assert_eq!(estimate, Decimal::ZERO);
}

#[test]
fn test_foundation_animal_scores_zero() {
    let registry = AnimalRegistry::from_records(vec![animal("F", Sex::Female)], vec![]);
    let estimate = ConsanguinityEstimator::new(&registry).estimate("F", 5).unwrap();
    assert_eq!(estimate, Decimal::ZERO);
}

#[test]
fn test_half_sib_mating() {
    // G is reached twice at generation 2: 1 / 2^3 = 12.5%
    let registry = half_sib_registry();
    let estimator = ConsanguinityEstimator::new(&registry);

    assert_eq!(estimator.estimate("X", 5).unwrap(), pct("12.50"));

    let census = estimator.census("X", 5).unwrap();
    let g = census.get("G").unwrap();
    assert_eq!((g.min_generation, g.occurrences), (2, 2));
    assert_eq!(census.get("X").unwrap().min_generation, 0);
}

#[test]
fn test_generation_window_excludes_deeper_duplicates() {
    let registry = half_sib_registry();
    let estimator = ConsanguinityEstimator::new(&registry);
    assert_eq!(estimator.estimate("X", 1).unwrap(), Decimal::ZERO);
    assert_eq!(estimator.estimate("X", 2).unwrap(), pct("12.50"));
}

#[test]
fn test_shallower_duplicate_increases_estimate() {
    // Shared ancestor C at generation 3 only
    let deep = AnimalRegistry::from_records(
        vec![
            animal("X", Sex::Female).with_father("S").with_mother("D"),
            animal("S", Sex::Male).with_father("SS"),
            animal("D", Sex::Female).with_father("DS"),
            animal("SS", Sex::Male).with_father("C"),
            animal("DS", Sex::Male).with_father("C"),
            animal("C", Sex::Male),
        ],
        vec![],
    );
    // Same herd with a second shared ancestor at generation 2
    let shallow = AnimalRegistry::from_records(
        vec![
            animal("X", Sex::Female).with_father("S").with_mother("D"),
            animal("S", Sex::Male).with_father("SS").with_mother("M"),
            animal("D", Sex::Female).with_father("DS").with_mother("M"),
            animal("SS", Sex::Male).with_father("C"),
            animal("DS", Sex::Male).with_father("C"),
            animal("C", Sex::Male),
            animal("M", Sex::Female),
        ],
        vec![],
    );

    let before = ConsanguinityEstimator::new(&deep).estimate("X", 5).unwrap();
    let after = ConsanguinityEstimator::new(&shallow).estimate("X", 5).unwrap();
    assert_eq!(before, pct("6.25"));
    assert_eq!(after, pct("18.75"));
    assert!(after > before);
}

#[test]
fn test_estimate_within_percentage_range() {
    for seed in 0..10 {
        let (registry, latest) = random_herd(seed, 6, 8);
        let estimator = ConsanguinityEstimator::new(&registry);
        for subject in &latest {
            let estimate = estimator.estimate(subject, 5).unwrap();
            assert!(estimate >= Decimal::ZERO, "seed {seed}: {estimate}");
            assert!(estimate <= Decimal::ONE_HUNDRED, "seed {seed}: {estimate}");
            assert!(estimate.scale() <= 2);
        }
    }
}

#[test]
fn test_self_parent_is_bounded() {
    let registry = AnimalRegistry::from_records(
        vec![animal("LOOP", Sex::Male).with_father("LOOP")],
        vec![],
    );
    // LOOP is recorded at generations 0..=5 and scored at its minimum, 0
    let estimate = ConsanguinityEstimator::new(&registry).estimate("LOOP", 5).unwrap();
    assert_eq!(estimate, pct("50.00"));
    assert_eq!(find_self_ancestry(&registry, "LOOP", 5).unwrap(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_decimal_places() {
    let registry = half_sib_registry();
    let estimate = ConsanguinityEstimator::new(&registry)
        .with_decimal_places(0)
        .estimate("X", 5)
        .unwrap();
    assert_eq!(estimate, pct("13"));
}

#[test]
fn test_unknown_animal_is_not_found() {
    let registry = half_sib_registry();
    let err = ConsanguinityEstimator::new(&registry)
        .estimate("ghost", 5)
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_lookup_failure_propagates() {
    let err = ConsanguinityEstimator::new(FailingLookup)
        .estimate("X", 5)
        .unwrap_err();
    assert!(!err.is_not_found());
}
