use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use herdbook::error::{HerdbookError, Result};
use herdbook::{AnimalLookup, AnimalRecord, AnimalRegistry, ReproductiveEvent, Sex};

/// Build a calendar date
#[must_use]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Reference date used by the classification scenarios
#[must_use]
pub fn reference_date() -> NaiveDate {
    date(2025, 6, 1)
}

/// The date `days` days before `reference_date()`
#[must_use]
pub fn days_ago(days: u64) -> NaiveDate {
    reference_date() - Days::new(days)
}

/// Animal with a fixed birth date, for pedigree fixtures
#[must_use]
pub fn animal(id: &str, sex: Sex) -> AnimalRecord {
    AnimalRecord::new(id, sex, date(2015, 3, 1))
}

/// Half-sibling mating: sire S and dam D share the founder sire G.
///
/// ```text
///        G     SM    DM
///       / \    |     |
///      S---+---+     |
///          D---------+
///       S x D -> X
/// ```
#[must_use]
pub fn half_sib_registry() -> AnimalRegistry {
    AnimalRegistry::from_records(
        vec![
            animal("X", Sex::Female).with_father("S").with_mother("D"),
            animal("S", Sex::Male).with_father("G").with_mother("SM"),
            animal("D", Sex::Female).with_father("G").with_mother("DM"),
            animal("G", Sex::Male),
            animal("SM", Sex::Female),
            animal("DM", Sex::Female),
        ],
        vec![],
    )
}

/// Complete outbred pedigree of `generations` generations above `root`;
/// every ancestor identifier is distinct
#[must_use]
pub fn outbred_registry(root: &str, generations: u32) -> AnimalRegistry {
    let mut animals = Vec::new();
    let mut frontier = vec![root.to_string()];
    for generation in 0..=generations {
        let mut next = Vec::new();
        for id in frontier {
            let mut record = animal(&id, Sex::Female);
            if generation < generations {
                let father = format!("{id}S");
                let mother = format!("{id}D");
                record = record.with_father(&father).with_mother(&mother);
                next.push(father);
                next.push(mother);
            }
            animals.push(record);
        }
        frontier = next;
    }
    AnimalRegistry::from_records(animals, vec![])
}

/// Random closed herd: founders plus `generations` generations bred from
/// randomly chosen parents of the previous generation
#[must_use]
pub fn random_herd(seed: u64, founders: usize, generations: usize) -> (AnimalRegistry, Vec<String>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut animals = Vec::new();
    let mut sires = Vec::new();
    let mut dams = Vec::new();

    for i in 0..founders {
        let sex = if i % 2 == 0 { Sex::Male } else { Sex::Female };
        let id = format!("F{i}");
        match sex {
            Sex::Male => sires.push(id.clone()),
            _ => dams.push(id.clone()),
        }
        animals.push(animal(&id, sex));
    }

    let mut last = Vec::new();
    for generation in 1..=generations {
        let (mut next_sires, mut next_dams) = (Vec::new(), Vec::new());
        last.clear();
        for i in 0..founders {
            let id = format!("G{generation}-{i}");
            let sire = &sires[rng.random_range(0..sires.len())];
            let dam = &dams[rng.random_range(0..dams.len())];
            let sex = if rng.random_bool(0.5) { Sex::Male } else { Sex::Female };
            animals.push(animal(&id, sex).with_father(sire).with_mother(dam));
            match sex {
                Sex::Male => next_sires.push(id.clone()),
                _ => next_dams.push(id.clone()),
            }
            last.push(id);
        }
        if !next_sires.is_empty() {
            sires = next_sires;
        }
        if !next_dams.is_empty() {
            dams = next_dams;
        }
    }

    (AnimalRegistry::from_records(animals, vec![]), last)
}

/// Dam with one recorded birth `birth_days_ago` days before the reference
/// date, optionally with a registered calf from that birth
#[must_use]
pub fn calved_dam_registry(
    dam_age_days: u64,
    birth_days_ago: u64,
    calf_registered: bool,
    extra_events: Vec<ReproductiveEvent>,
) -> (AnimalRegistry, AnimalRecord) {
    let birth = days_ago(birth_days_ago);
    let dam = AnimalRecord::new("DAM", Sex::Female, days_ago(dam_age_days));
    let mut animals = vec![dam.clone()];
    if calf_registered {
        animals.push(AnimalRecord::new("CALF", Sex::Male, birth).with_reproduction("EB"));
    }

    let mut events = vec![
        ReproductiveEvent::new("EB", "DAM", birth - Days::new(283)).born_on(birth),
    ];
    events.extend(extra_events);

    (AnimalRegistry::from_records(animals, events), dam)
}

/// Lookup whose backing store is unavailable
pub struct FailingLookup;

impl AnimalLookup for FailingLookup {
    fn find_animal(&self, _id: &str) -> Result<Option<AnimalRecord>> {
        Err(HerdbookError::computation_fault("registry unavailable"))
    }

    fn find_reproductive_events_for_dam(&self, _animal_id: &str) -> Result<Vec<ReproductiveEvent>> {
        Err(HerdbookError::computation_fault("registry unavailable"))
    }

    fn find_offspring_by_event(&self, _event_id: &str) -> Result<Vec<AnimalRecord>> {
        Err(HerdbookError::computation_fault("registry unavailable"))
    }
}
