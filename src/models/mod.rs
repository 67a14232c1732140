//! Domain models for the herdbook
//!
//! Animal records and reproductive events come from the registry; ancestor
//! nodes and pedigree trees are derived from them on request.

pub mod animal;
pub mod implementations;
pub mod pedigree;
pub mod reproduction;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use animal::AnimalRecord;
pub use pedigree::{AncestorNode, AnimalSummary, PedigreeTree};
pub use reproduction::ReproductiveEvent;
pub use traits::{ArrowSchema, EntityModel};
pub use types::{LifeStage, PregnancyOutcome, Sex};
