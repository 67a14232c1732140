//! Trait implementations for registry models kept apart from the model definitions.

pub mod arrow_schema;
