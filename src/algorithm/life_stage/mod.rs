//! Life-stage classification
//!
//! A stateless rule engine: reproductive predicates are derived from the
//! dam's event history, then a fixed sequence of rules picks the category.

pub mod classifier;
pub mod rules;
pub mod status;

pub use classifier::LifeStageClassifier;
pub use rules::evaluate;
pub use status::ReproductiveStatus;
