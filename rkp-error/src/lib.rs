//! Unified error handling for rkpower
//!
//! This crate provides the single error type used by the power module crates.
//! Host-facing entry points never return these errors; they are logged at the
//! boundary. Internal helpers propagate them with `?`.

use std::io;
use std::path::PathBuf;

/// Result type alias using PowerError
pub type Result<T> = std::result::Result<T, PowerError>;

/// Unified error type for all power module operations
#[derive(thiserror::Error, Debug)]
pub enum PowerError {
    // ============================================================================
    // Control File Errors
    // ============================================================================
    #[error("Error opening {path}: {source}")]
    ControlOpen {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Error writing to {path}: {source}")]
    ControlWrite {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Short write to {path}: {written} of {expected} bytes")]
    ShortWrite {
        path: PathBuf,
        written: usize,
        expected: usize,
    },

    // ============================================================================
    // Frequency Table Errors
    // ============================================================================
    #[error("Error reading from {path}: {source}")]
    FrequencyRead {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Frequency table overflow for {path}: {discovered} entries, capacity {capacity}")]
    TableOverflow {
        path: PathBuf,
        capacity: usize,
        discovered: usize,
    },

    #[error("Invalid {table} freq at index {index} can not be set")]
    InvalidFrequency {
        table: &'static str,
        index: usize,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl PowerError {
    /// Create a config error from a string
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Path of the control or source file involved, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::ControlOpen { path, .. }
            | Self::ControlWrite { path, .. }
            | Self::ShortWrite { path, .. }
            | Self::FrequencyRead { path, .. }
            | Self::TableOverflow { path, .. } => Some(path),
            _ => None,
        }
    }
}
