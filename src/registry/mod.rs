//! Registry snapshot loaders
//!
//! The herdbook core reads animals through the `AnimalLookup` trait. This
//! module builds the in-memory implementation of that trait from JSON or
//! Parquet snapshots of the animal registry.

pub mod loader;

pub use loader::{
    RegistrySnapshot, load_registry_from_json, load_registry_from_parquet, read_models,
    read_parquet,
};
