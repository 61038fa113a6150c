use std::sync::atomic::AtomicBool;
use std::sync::mpsc;
use std::sync::Arc;

use crate::train::epoch_stats::EpochStats;
use crate::train::update::UpdateDiscipline;

/// Default number of samples per mini-batch flush.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Configuration for a `train()` run.
///
/// # Fields
/// - `learning_rate` — step size for every weight correction
/// - `min_error`     — convergence threshold on the epoch mean squared error
/// - `discipline`    — when corrections are applied (see `UpdateDiscipline`)
/// - `batch_size`    — samples per flush under `MiniBatch`; ignored otherwise
/// - `max_epochs`    — optional cap; `None` preserves the original unbounded
///                     loop, `Some(n)` turns epoch `n` without convergence
///                     into `NnError::DidNotConverge`
/// - `progress_tx`   — optional channel sender; one `EpochStats` is sent per
///                     completed epoch. If the receiver is dropped the loop
///                     terminates early (clean shutdown).
/// - `stop_flag`     — optional atomic flag; when set to `true` from another
///                     thread the loop terminates after the current epoch.
pub struct TrainConfig {
    pub learning_rate: f64,
    pub min_error: f64,
    pub discipline: UpdateDiscipline,
    pub batch_size: usize,
    pub max_epochs: Option<usize>,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with the default batch size, no
    /// epoch cap, no progress channel and no stop flag.
    pub fn new(learning_rate: f64, min_error: f64, discipline: UpdateDiscipline) -> Self {
        TrainConfig {
            learning_rate,
            min_error,
            discipline,
            batch_size: DEFAULT_BATCH_SIZE,
            max_epochs: None,
            progress_tx: None,
            stop_flag: None,
        }
    }
}
