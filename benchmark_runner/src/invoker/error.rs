//!
//! The measurement program execution error.
//!

use std::path::PathBuf;

///
/// The measurement program execution error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The executable cannot be resolved.
    #[error("Measurement program {executable:?} not found: {error}")]
    NotFound {
        /// The executable as specified.
        executable: PathBuf,
        /// The underlying lookup error.
        error: which::Error,
    },
    /// The process cannot be started.
    #[error("Measurement program {executable:?} spawning: {error}")]
    Spawning {
        /// The resolved executable.
        executable: PathBuf,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The process has not exited successfully.
    #[error("Measurement program {executable:?} failed with {status}")]
    Status {
        /// The resolved executable.
        executable: PathBuf,
        /// The exit status.
        status: std::process::ExitStatus,
    },
    /// The standard output is not valid UTF-8.
    #[error("Measurement program {executable:?} output decoding: {error}")]
    OutputEncoding {
        /// The resolved executable.
        executable: PathBuf,
        /// The underlying decoding error.
        error: std::string::FromUtf8Error,
    },
}
