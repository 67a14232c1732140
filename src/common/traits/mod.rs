//! Common traits used across the codebase
//!
//! This module defines the registry lookup seam and the collection traits
//! shared by the in-memory registry.

pub mod collection;
pub mod lookup;

// Re-export collection traits
pub use collection::{LookupCollection, ModelCollection};

// Re-export the registry lookup trait
pub use lookup::AnimalLookup;
