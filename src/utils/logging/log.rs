//! Logging helpers with a consistent message format.

use std::fmt::Display;
use std::time::Duration;

/// Log an operation start
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `target` - What is operated on (a path, an animal identifier, ...)
pub fn log_operation_start(operation: &str, target: impl Display) {
    log::info!("{operation} {target}");
}

/// Log an operation completion
///
/// # Arguments
/// * `operation` - Past-tense description of the operation
/// * `target` - What was operated on
/// * `items` - Number of items processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    target: impl Display,
    items: usize,
    elapsed: Option<Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!("Successfully {operation} {items} items for {target} in {duration:?}");
    } else {
        log::info!("Successfully {operation} {items} items for {target}");
    }
}

/// Log a warning, optionally naming what it concerns
pub fn log_warning(message: &str, target: Option<&dyn Display>) {
    if let Some(target) = target {
        log::warn!("{message}: {target}");
    } else {
        log::warn!("{message}");
    }
}
