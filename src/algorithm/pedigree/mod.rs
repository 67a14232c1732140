//! Pedigree traversal and consanguinity
//!
//! This module expands ancestor trees from registry lookups, estimates
//! consanguinity from repeated ancestors and checks ancestry integrity.

pub mod consanguinity;
pub mod integrity;
pub mod walker;

// Re-export commonly used items
pub use consanguinity::{AncestorCensus, CensusEntry, ConsanguinityEstimator};
pub use integrity::find_self_ancestry;
pub use walker::PedigreeWalker;
