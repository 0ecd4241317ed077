//! Error types for the simulator's fallible operations.
//!
//! Only two things can fail here: reading a ROM image from disk and parsing a
//! configuration file. Neither is fatal to a running core; the caller gets a
//! descriptive error and the simulator's state is untouched.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to frontends by the simulation layer.
#[derive(Debug, Error)]
pub enum SimError {
    /// A ROM image could not be read from disk.
    #[error("could not read ROM file '{path}': {source}")]
    RomRead {
        /// Path the frontend asked to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration file could not be read from disk.
    #[error("could not read config file '{path}': {source}")]
    ConfigRead {
        /// Path the frontend asked to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Configuration JSON failed to deserialize.
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
