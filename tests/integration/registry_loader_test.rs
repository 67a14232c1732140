//! Tests for loading registry snapshots from JSON and Parquet files

use std::fs::File;
use std::io::Write;

use herdbook::models::ArrowSchema;
use herdbook::registry::read_models;
use herdbook::{
    AnimalLookup, AnimalRecord, HerdbookService, PregnancyOutcome, ReproductiveEvent, Sex,
    load_registry_from_json, load_registry_from_parquet,
};
use parquet::arrow::ArrowWriter;
use tempfile::TempDir;

use crate::utils::date;

const SNAPSHOT: &str = r#"{
    "animals": [
        { "id": "S", "sex": "M", "birth_date": "2016-02-10" },
        { "id": "D", "sex": "H", "birth_date": "2017-05-03", "current_category": "Vacía" },
        { "id": "X", "sex": "F", "birth_date": "2024-12-01",
          "father_id": "S", "mother_id": "D", "reproduction_id": "E1" }
    ],
    "reproductive_events": [
        { "id": "E1", "dam_id": "D", "sire_id": "S", "service_date": "2024-02-22",
          "confirmation_date": "2024-04-10", "actual_birth_date": "2024-12-01",
          "outcome": "preñada" }
    ]
}"#;

fn write_parquet<T: ArrowSchema>(path: &std::path::Path, models: &[T]) {
    let batch = T::to_record_batch(models).unwrap();
    let file = File::create(path).unwrap();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();
}

#[test]
fn test_load_json_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("registry.json");
    File::create(&path)
        .unwrap()
        .write_all(SNAPSHOT.as_bytes())
        .unwrap();

    let registry = load_registry_from_json(&path).unwrap();
    assert_eq!(registry.animal_count(), 3);
    assert_eq!(registry.event_count(), 1);

    let dam = registry.find_animal("D").unwrap().unwrap();
    assert_eq!(dam.sex, Sex::Female);
    assert_eq!(dam.current_category.as_deref(), Some("Vacía"));
    assert!(dam.active);

    let events = registry.find_reproductive_events_for_dam("D").unwrap();
    assert_eq!(events[0].outcome, Some(PregnancyOutcome::Pregnant));
    assert!(registry.has_offspring_for_event("E1").unwrap());

    let tree = HerdbookService::new(&registry).pedigree("X", 2).unwrap();
    assert_eq!(tree.known_ancestor_count(), 2);
}

#[test]
fn test_invalid_json_reports_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    File::create(&path).unwrap().write_all(b"{ animals: ").unwrap();

    let err = load_registry_from_json(&path).unwrap_err();
    assert!(err.to_string().contains("broken.json"), "{err}");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_registry_from_json(&dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("absent.json"), "{err}");
}

#[test]
fn test_load_parquet_snapshot() {
    let dir = TempDir::new().unwrap();
    let animals_path = dir.path().join("animals.parquet");
    let events_path = dir.path().join("events.parquet");

    let animals = vec![
        AnimalRecord::new("S", Sex::Male, date(2016, 2, 10)),
        AnimalRecord::new("D", Sex::Female, date(2017, 5, 3)),
        AnimalRecord::new("X", Sex::Female, date(2024, 12, 1))
            .with_father("S")
            .with_mother("D")
            .with_reproduction("E1"),
    ];
    let events = vec![
        ReproductiveEvent::new("E1", "D", date(2024, 2, 22))
            .with_sire("S")
            .confirmed_on(date(2024, 4, 10))
            .born_on(date(2024, 12, 1)),
        ReproductiveEvent::new("E2", "D", date(2025, 3, 1))
            .with_outcome(PregnancyOutcome::Other("repeat".to_string())),
    ];
    write_parquet(&animals_path, &animals);
    write_parquet(&events_path, &events);

    let registry = load_registry_from_parquet(&animals_path, Some(events_path.as_path())).unwrap();
    assert_eq!(registry.animal_count(), 3);
    assert_eq!(registry.find_animal("X").unwrap().unwrap(), animals[2]);

    let history = registry.find_reproductive_events_for_dam("D").unwrap();
    assert_eq!(history, events);

    let read_back = read_models::<AnimalRecord>(&animals_path).unwrap();
    assert_eq!(read_back.len(), 3);
}

#[test]
fn test_parquet_without_events() {
    let dir = TempDir::new().unwrap();
    let animals_path = dir.path().join("animals.parquet");
    write_parquet(
        &animals_path,
        &[AnimalRecord::new("A", Sex::Male, date(2020, 1, 1))],
    );

    let registry = load_registry_from_parquet(&animals_path, None).unwrap();
    assert_eq!(registry.animal_count(), 1);
    assert_eq!(registry.event_count(), 0);
}
