//!
//! The harness runner error.
//!

use std::path::PathBuf;
use std::time::Duration;

///
/// The harness runner error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The executable cannot be resolved.
    #[error("The `{program}` executable not found in ${{PATH}}: {error}")]
    NotFound {
        /// The program name.
        program: String,
        /// The underlying lookup error.
        error: which::Error,
    },
    /// The process cannot be started.
    #[error("{program} subprocess spawning: {error}")]
    Spawning {
        /// The program name.
        program: String,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The process output cannot be read.
    #[error("{program} subprocess {stream} reading: {error}")]
    Reading {
        /// The program name.
        program: String,
        /// The stream name.
        stream: &'static str,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The process status cannot be queried.
    #[error("{program} subprocess waiting: {error}")]
    Waiting {
        /// The program name.
        program: String,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The process has not finished in time and was killed.
    #[error("{program} subprocess has not finished in {timeout:?} and was killed")]
    Timeout {
        /// The program name.
        program: String,
        /// The declared timeout.
        timeout: Duration,
    },
    /// The raw report cannot be persisted.
    #[error("Raw report file {path:?} writing: {error}")]
    Writing {
        /// The raw report path.
        path: PathBuf,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The process exited unsuccessfully.
    #[error("{program} exited with {status}: {stderr}")]
    ExitStatus {
        /// The program name.
        program: String,
        /// The exit status.
        status: std::process::ExitStatus,
        /// The captured standard error.
        stderr: String,
    },
}
