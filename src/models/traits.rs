//! Trait definitions for domain models
//!
//! This module defines the core traits that registry models implement,
//! providing identifier access and Arrow conversion.

use crate::error::Result;
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use std::hash::Hash;

/// A trait that all registry models must implement.
///
/// The `EntityModel` trait provides identifier access so models can be
/// stored in keyed collections.
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Get the unique identifier for this model
    fn id(&self) -> &Self::Id;
}

/// A trait for models that can be converted to and from Arrow `RecordBatch`.
pub trait ArrowSchema: Sized {
    /// Get the Arrow schema for this model
    fn schema() -> Schema;

    /// Convert a `RecordBatch` to a vector of this model
    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>>;

    /// Convert a slice of this model to a `RecordBatch`
    fn to_record_batch(models: &[Self]) -> Result<RecordBatch>;

    /// Get the schema as Arc<Schema>
    fn schema_ref() -> std::sync::Arc<Schema> {
        std::sync::Arc::new(Self::schema())
    }
}
