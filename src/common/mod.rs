//! Common traits
//!
//! This module provides shared interfaces used across different parts of the
//! codebase, helping to avoid circular dependencies.

pub mod traits;

// Re-export common traits for easier imports
pub use traits::*;
