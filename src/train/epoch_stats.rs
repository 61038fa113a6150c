use serde::{Deserialize, Serialize};

/// Per-epoch statistics emitted by `train()`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the
/// training loop sends one `EpochStats` value at the end of every
/// completed epoch, so a host can drive progress displays without
/// touching the network mid-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Mean squared error of this epoch: `Σ per-sample squared error / (2N)`.
    pub mean_squared_error: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
