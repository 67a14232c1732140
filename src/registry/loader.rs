//! Registry snapshot loading
//!
//! Builds an `AnimalRegistry` from a JSON snapshot or from Parquet files of
//! animal and reproductive-event records.

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use parquet::arrow::{ProjectionMask, arrow_reader::ParquetRecordBatchReaderBuilder};
use serde::{Deserialize, Serialize};

use crate::collections::AnimalRegistry;
use crate::error::Result;
use crate::error::util::{safe_open_file, safe_read_to_string};
use crate::models::{AnimalRecord, ArrowSchema, ReproductiveEvent};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// JSON registry snapshot layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Animal records
    #[serde(default)]
    pub animals: Vec<AnimalRecord>,
    /// Reproductive events
    #[serde(default)]
    pub reproductive_events: Vec<ReproductiveEvent>,
}

impl RegistrySnapshot {
    /// Build the in-memory registry for this snapshot
    #[must_use]
    pub fn into_registry(self) -> AnimalRegistry {
        AnimalRegistry::from_records(self.animals, self.reproductive_events)
    }
}

/// Load a registry from a JSON snapshot
pub fn load_registry_from_json(path: &Path) -> Result<AnimalRegistry> {
    let start = Instant::now();
    log_operation_start("Loading registry snapshot from", path.display());

    let content = safe_read_to_string(path, "registry snapshot")?;
    let snapshot: RegistrySnapshot = serde_json::from_str(&content)
        .with_context(|| format!("Invalid registry snapshot: {}", path.display()))?;

    let registry = snapshot.into_registry();
    log_operation_complete(
        "loaded",
        path.display(),
        registry.animal_count() + registry.event_count(),
        Some(start.elapsed()),
    );
    Ok(registry)
}

/// Load a registry from Parquet files; the events file is optional
pub fn load_registry_from_parquet(
    animals_path: &Path,
    events_path: Option<&Path>,
) -> Result<AnimalRegistry> {
    let (animals, events) = rayon::join(
        || read_models::<AnimalRecord>(animals_path),
        || events_path.map_or_else(|| Ok(Vec::new()), read_models::<ReproductiveEvent>),
    );
    Ok(AnimalRegistry::from_records(animals?, events?))
}

/// Read every record of a model type from a Parquet file
pub fn read_models<T: ArrowSchema>(path: &Path) -> Result<Vec<T>> {
    let schema = T::schema();
    let batches = read_parquet(path, Some(&schema))?;
    let mut models = Vec::new();
    for batch in &batches {
        models.extend(T::from_record_batch(batch)?);
    }
    Ok(models)
}

/// Read a Parquet file into Arrow record batches, projecting onto `schema`
/// when given
pub fn read_parquet(path: &Path, schema: Option<&Schema>) -> Result<Vec<RecordBatch>> {
    let start = Instant::now();
    log_operation_start("Reading parquet file", path.display());

    let file = safe_open_file(path, "reading parquet file")?;
    let reader_builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .with_context(|| format!("Failed to read parquet file: {}", path.display()))?;

    let projection = schema.and_then(|schema| {
        let file_schema = reader_builder.schema();
        let indices = schema
            .fields()
            .iter()
            .filter_map(|f| match file_schema.index_of(f.name()) {
                Ok(idx) => Some(idx),
                Err(_) => {
                    log_warning(
                        &format!("Field {} not found in parquet file, skipping", f.name()),
                        Some(&path.display() as &dyn std::fmt::Display),
                    );
                    None
                }
            })
            .collect_vec();
        (!indices.is_empty())
            .then(|| ProjectionMask::roots(reader_builder.parquet_schema(), indices))
    });

    let reader = match projection {
        Some(mask) => reader_builder.with_projection(mask).build(),
        None => reader_builder.build(),
    }
    .with_context(|| format!("Failed to build parquet reader for {}", path.display()))?;

    let mut batches = Vec::new();
    for batch_result in reader {
        let batch = batch_result
            .with_context(|| format!("Failed to read record batch from {}", path.display()))?;
        batches.push(batch);
    }

    log_operation_complete("read", path.display(), batches.len(), Some(start.elapsed()));
    Ok(batches)
}
