use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::data::sample::Sample;
use crate::error::NnError;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::update::UpdateDiscipline;

/// Outcome of a finished training run.
#[derive(Debug, Clone, Copy)]
pub struct TrainSummary {
    /// Number of completed epochs.
    pub epochs: usize,
    /// Mean squared error of the last completed epoch.
    pub final_error: f64,
    /// Whether the run ended because the error threshold was reached.
    /// `false` means the run was stopped externally; the network is then
    /// left untrained.
    pub converged: bool,
}

/// Trains `network` on `samples` until the epoch mean squared error
/// drops below `config.min_error`.
///
/// Each epoch sweeps the samples in their fixed order. Per sample: one
/// forward pass, the squared error `Σ(tᵢ-oᵢ)²` is recorded, output and
/// hidden error terms are computed, and weights are corrected or
/// accumulated according to `config.discipline`. `FullBatch` flushes the
/// accumulators after the epoch's last sample; `MiniBatch` flushes after
/// every `batch_size`-th sample — when the sample count is not a
/// multiple of `batch_size` the trailing partial batch is deliberately
/// left accumulated and carries into the next epoch.
///
/// After each epoch the mean squared error `E = Σ errors / (2N)` is
/// logged and checked against the threshold. On convergence the network
/// is marked trained. With `config.max_epochs` set, running out of
/// epochs yields [`NnError::DidNotConverge`]; without it the loop is
/// unbounded, exactly like the per-epoch test alone. A set `stop_flag`
/// or a dropped progress receiver ends the run cleanly with
/// `converged: false`.
///
/// # Panics
/// Panics if `samples` is empty, a sample's shape does not match the
/// network, or `batch_size` is 0.
pub fn train(
    network: &mut Network,
    samples: &[Sample],
    config: &TrainConfig,
) -> Result<TrainSummary, NnError> {
    assert!(!samples.is_empty(), "samples must not be empty");
    assert!(config.batch_size > 0, "batch_size must be at least 1");
    for sample in samples {
        assert_eq!(
            sample.input.len(),
            network.input_size(),
            "sample input length must match the input layer"
        );
        assert_eq!(
            sample.target.len(),
            network.output_size(),
            "sample target length must match the output layer"
        );
    }

    let mut epoch = 0;
    let mut last_error = 0.0;
    loop {
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                return Ok(TrainSummary {
                    epochs: epoch,
                    final_error: last_error,
                    converged: false,
                });
            }
        }

        epoch += 1;
        let t_start = Instant::now();
        let mut errors = vec![0.0; samples.len()];

        for (index, sample) in samples.iter().enumerate() {
            let output = network.forward(&sample.input);

            errors[index] = sample
                .target
                .iter()
                .zip(output.iter())
                .map(|(t, o)| (t - o).powi(2))
                .sum();

            network.compute_output_errors(&sample.target);
            network.backpropagate_errors();

            match config.discipline {
                UpdateDiscipline::PerSample => network.correct_weights(config.learning_rate),
                UpdateDiscipline::FullBatch | UpdateDiscipline::MiniBatch => {
                    network.accumulate_corrections(config.learning_rate)
                }
            }

            let flush = match config.discipline {
                UpdateDiscipline::PerSample => false,
                UpdateDiscipline::FullBatch => index == samples.len() - 1,
                UpdateDiscipline::MiniBatch => (index + 1) % config.batch_size == 0,
            };
            if flush {
                network.apply_accumulated();
            }
        }

        let mse = errors.iter().sum::<f64>() / (2.0 * samples.len() as f64);
        last_error = mse;
        log::debug!("epoch {}: mean squared error {}", epoch, mse);

        if let Some(ref tx) = config.progress_tx {
            let stats = EpochStats {
                epoch,
                mean_squared_error: mse,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            // A dropped receiver means the host has gone away.
            if tx.send(stats).is_err() {
                return Ok(TrainSummary {
                    epochs: epoch,
                    final_error: mse,
                    converged: false,
                });
            }
        }

        if mse < config.min_error {
            network.mark_trained();
            return Ok(TrainSummary {
                epochs: epoch,
                final_error: mse,
                converged: true,
            });
        }

        if let Some(max_epochs) = config.max_epochs {
            if epoch >= max_epochs {
                return Err(NnError::DidNotConverge {
                    epochs: epoch,
                    last_error: mse,
                });
            }
        }
    }
}
