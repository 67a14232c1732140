//! Shared utilities
//!
//! Arrow column helpers and consistent logging helpers used across the crate.

pub mod arrow;
pub mod logging;
