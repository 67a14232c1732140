//! Algorithm implementations for herd records
//!
//! This module contains the pedigree traversal, consanguinity estimation
//! and life-stage classification engines.

pub mod life_stage;
pub mod pedigree;
