//! Error types for the converter.

use thiserror::Error;

/// Converter error type.
///
/// Fatal causes are distinct variants so the CLI can map each to its own
/// process exit code.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input descriptor matched no readable files.
    #[error("\"{0}\" matched 0 input files")]
    NoInputFiles(String),

    /// The input chain contains no entries.
    #[error("input chain has no entries")]
    NoEntries,

    /// The output destination could not be created.
    #[error("couldn't open output file {path}: {source}")]
    Output {
        /// Destination path as given.
        path: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// An input event has fewer than the two mandatory particle slots
    /// (incoming neutrino and struck nucleon).
    #[error("malformed event: {n_particles} particles, need at least 2")]
    MalformedEvent {
        /// Length of the offending particle list.
        n_particles: usize,
    },

    /// An event needs more output slots than the format declares.
    #[error("{array} array capacity exceeded: event needs {needed} slots, format holds {capacity}")]
    CapacityExceeded {
        /// Name of the output array.
        array: &'static str,
        /// Slots the event requires.
        needed: usize,
        /// Declared capacity.
        capacity: usize,
    },

    /// Malformed or unreadable input container.
    #[error("source error: {0}")]
    Source(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
