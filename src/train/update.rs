use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// When weight corrections are applied during a training run.
///
/// - `PerSample`  — corrections are applied immediately after every
///   sample (online gradient descent).
/// - `FullBatch`  — corrections accumulate all epoch and are applied
///   once, after the epoch's last sample.
/// - `MiniBatch`  — corrections accumulate and are applied whenever
///   `batch_size` samples have been seen since the last flush. A
///   trailing partial batch stays accumulated across the epoch
///   boundary; see `train()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateDiscipline {
    PerSample,
    FullBatch,
    MiniBatch,
}

impl FromStr for UpdateDiscipline {
    type Err = String;

    fn from_str(s: &str) -> Result<UpdateDiscipline, String> {
        match s {
            "per-sample" => Ok(UpdateDiscipline::PerSample),
            "full-batch" => Ok(UpdateDiscipline::FullBatch),
            "mini-batch" => Ok(UpdateDiscipline::MiniBatch),
            other => Err(format!(
                "unknown update discipline: {} (expected per-sample, full-batch or mini-batch)",
                other
            )),
        }
    }
}
