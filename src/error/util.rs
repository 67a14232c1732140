//! Utility functions for error handling
//!
//! Helpers that open registry and configuration files with enough context in
//! the error message to tell which file was needed and why.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::anyhow;

use crate::error::Result;

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(anyhow!("File not found: {} (needed for: {purpose})", path.display()).into());
    }

    if !path.is_file() {
        return Err(anyhow!(
            "Path is not a file: {} (expected a file for: {purpose})",
            path.display()
        )
        .into());
    }

    match fs::File::open(path) {
        Ok(file) => Ok(file),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Permission denied - check file permissions".to_string()
                }
                _ => format!("Failed to open file for: {purpose}"),
            };
            Err(anyhow::Error::new(e)
                .context(format!("{context}: {}", path.display()))
                .into())
        }
    }
}

/// Safely read a file to string with rich error information
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;

    let mut content = String::new();
    match io::Read::read_to_string(&mut file, &mut content) {
        Ok(_) => Ok(content),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::InvalidData => {
                    "File contains invalid UTF-8 data - cannot read as text".to_string()
                }
                _ => format!("Failed to read file content for: {purpose}"),
            };
            Err(anyhow::Error::new(e)
                .context(format!("{context}: {}", path.display()))
                .into())
        }
    }
}
