//!
//! The result record persistence error.
//!

use std::path::PathBuf;

///
/// The result record persistence error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the record file.
    #[error("Reading result file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the record file.
        path: PathBuf,
    },
    /// Error parsing the record file.
    #[error("Parsing result file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the record file.
        path: PathBuf,
    },
    /// Error writing the record file.
    #[error("Writing result file {path:?}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the record file.
        path: PathBuf,
    },
}
