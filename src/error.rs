use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong in the gesture/training pipeline.
///
/// Variants map one-to-one onto the failure points of the pipeline:
/// construction (`InvalidArchitecture`), feature extraction
/// (`DegenerateGesture`), sample I/O (`SampleFormat`,
/// `SampleSourceUnavailable`, `SampleSinkUnavailable`), and the
/// train/infer lifecycle (`NotTrained`, `DidNotConverge`).
#[derive(Debug, Error)]
pub enum NnError {
    /// The architecture descriptor is unusable: unparsable token, fewer
    /// than two layers, a zero-sized layer, or an input layer that is not
    /// twice the landmark count.
    #[error("invalid architecture: {reason}")]
    InvalidArchitecture { reason: String },

    /// The gesture collapses to a single point and carries no shape
    /// information, so it cannot be normalized.
    #[error("degenerate gesture: need at least two distinct points")]
    DegenerateGesture,

    /// A sample record does not follow the
    /// `x0 y0 .. x(M-1) y(M-1) t0 .. t(C-1)` schema. `line` is 1-based.
    #[error("malformed sample record at line {line}: {reason}")]
    SampleFormat { line: usize, reason: String },

    /// The sample file is missing or unreadable; no training occurs.
    #[error("cannot read sample file {path}: {source}")]
    SampleSourceUnavailable { path: PathBuf, source: io::Error },

    /// Appending a record to the sample file failed.
    #[error("cannot append to sample file {path}: {source}")]
    SampleSinkUnavailable { path: PathBuf, source: io::Error },

    /// Inference was requested before a training run converged.
    #[error("network is not trained")]
    NotTrained,

    /// The configured epoch cap ran out before the mean squared error
    /// dropped below the threshold.
    #[error("training did not converge after {epochs} epochs (last error {last_error})")]
    DidNotConverge { epochs: usize, last_error: f64 },
}
