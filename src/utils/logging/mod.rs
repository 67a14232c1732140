//! Logging utilities
//!
//! This module provides standardized logging functions for registry loads and
//! herdbook queries.

pub mod log;

pub use log::{log_operation_complete, log_operation_start, log_warning};
