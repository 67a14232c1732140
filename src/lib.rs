//! A Rust library for herd-book records: pedigree traversal, consanguinity
//! estimation and life-stage classification over an animal registry.

pub mod algorithm;
pub mod collections;
pub mod common;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod service;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::HerdbookConfig;
pub use error::{HerdbookError, Result};
pub use service::{CategoryChange, ConsanguinityReport, HerdbookService};

// Registry access
pub use collections::AnimalRegistry;
pub use common::traits::AnimalLookup;
pub use registry::{load_registry_from_json, load_registry_from_parquet};

// Models
pub use models::{
    AncestorNode, AnimalRecord, AnimalSummary, LifeStage, PedigreeTree, PregnancyOutcome,
    ReproductiveEvent, Sex,
};

// Engines
pub use algorithm::life_stage::LifeStageClassifier;
pub use algorithm::pedigree::{ConsanguinityEstimator, PedigreeWalker, find_self_ancestry};
