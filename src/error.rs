//! Error types for surfrank.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for the CLI.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const INPUT_ERROR: i32 = 1;
    pub const NO_CONVERGENCE: i32 = 2;
}

/// Main error type for surfrank.
///
/// Everything except [`Error::ConvergenceFailed`] is a fatal input error:
/// the corpus or the configuration is unusable and the run aborts. A
/// convergence failure is a distinct condition so callers can loosen the
/// tolerance (or raise the round cap) and retry.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read corpus at {}: {source}", .path.display())]
    CorpusUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no .html pages found in {}", .0.display())]
    EmptyCorpus(PathBuf),

    #[error("page not in corpus: {0}")]
    UnknownPage(String),

    #[error("damping factor must be in (0, 1), got {0}")]
    InvalidDamping(f64),

    #[error("sample count must be positive")]
    InvalidSampleCount,

    #[error("convergence threshold must be positive, got {0}")]
    InvalidTolerance(f64),

    #[error("maximum round cap must be positive")]
    InvalidMaxRounds,

    #[error("no convergence after {rounds} rounds (last delta {delta:.6})")]
    ConvergenceFailed { rounds: usize, delta: f64 },
}

impl Error {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConvergenceFailed { .. } => exit_codes::NO_CONVERGENCE,
            _ => exit_codes::INPUT_ERROR,
        }
    }
}
