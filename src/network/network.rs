use rand::prelude::*;

use crate::error::NnError;
use crate::network::layer::Layer;
use crate::network::unit::{sigmoid, Unit};

/// A fully-connected feedforward network of sigmoid units.
///
/// The network exclusively owns its layers and units and is never
/// resized after construction. Training mutates it in place through the
/// crate-internal error/weight methods; the `trained` flag is set only
/// by a converged training run and gates inference.
#[derive(Debug, Clone)]
pub struct Network {
    pub layers: Vec<Layer>,
    trained: bool,
}

impl Network {
    /// Builds a network from its ordered layer sizes.
    ///
    /// `points_per_gesture` is M; the input layer must have size `2*M`
    /// (one x and one y per landmark) or construction fails with
    /// [`NnError::InvalidArchitecture`]. Weights are independent uniform
    /// draws in `[0, 1)` — enough to avoid the all-zero degenerate case,
    /// with no stronger symmetry-breaking claim. Accumulators start at 0.
    pub fn new(sizes: &[usize], points_per_gesture: usize) -> Result<Network, NnError> {
        if sizes.len() < 2 {
            return Err(NnError::InvalidArchitecture {
                reason: "need at least an input and an output layer".to_string(),
            });
        }
        if sizes.iter().any(|&size| size == 0) {
            return Err(NnError::InvalidArchitecture {
                reason: "layer sizes must be positive".to_string(),
            });
        }
        if sizes[0] != 2 * points_per_gesture {
            return Err(NnError::InvalidArchitecture {
                reason: format!(
                    "input layer must have size 2*M = {}, got {}",
                    2 * points_per_gesture,
                    sizes[0]
                ),
            });
        }

        let mut rng = rand::thread_rng();
        let mut layers = Vec::with_capacity(sizes.len());
        for k in 0..sizes.len() {
            // Output-layer units carry no outgoing weights.
            let fan_out = if k + 1 < sizes.len() { sizes[k + 1] } else { 0 };
            let units = (0..sizes[k])
                .map(|_| Unit::new((0..fan_out).map(|_| rng.gen::<f64>()).collect()))
                .collect();
            layers.push(Layer::new(units));
        }

        Ok(Network {
            layers,
            trained: false,
        })
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].len()
    }

    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].len()
    }

    /// Whether a training run has converged on this network.
    pub fn is_trained(&self) -> bool {
        self.trained
    }

    pub(crate) fn mark_trained(&mut self) {
        self.trained = true;
    }

    /// Runs one forward pass and returns the output layer's activations.
    ///
    /// Input-layer activations are set directly from `input`; every later
    /// unit computes `net = Σ prev.activation * prev.weights[i]` (no bias
    /// term) and applies the sigmoid. The stored activations are the only
    /// side effect; the backward pass reads them.
    pub fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        assert_eq!(
            input.len(),
            self.input_size(),
            "input length must match the input layer"
        );

        for (unit, &x) in self.layers[0].units.iter_mut().zip(input) {
            unit.activation = x;
        }

        for k in 1..self.layers.len() {
            let (prev_layers, rest) = self.layers.split_at_mut(k);
            let prev = &prev_layers[k - 1];
            for (i, unit) in rest[0].units.iter_mut().enumerate() {
                let net: f64 = prev
                    .units
                    .iter()
                    .map(|p| p.activation * p.weights[i])
                    .sum();
                unit.activation = sigmoid(net);
            }
        }

        self.layers[self.layers.len() - 1].activations()
    }

    /// Error terms for the output layer: `y*(1-y)*(t-y)`, the
    /// sigmoid-derivative-weighted residual.
    pub(crate) fn compute_output_errors(&mut self, target: &[f64]) {
        let last = self.layers.len() - 1;
        for (unit, &t) in self.layers[last].units.iter_mut().zip(target) {
            unit.error = unit.activation * (1.0 - unit.activation) * (t - unit.activation);
        }
    }

    /// Propagates error terms backwards through the hidden layers, from
    /// the second-to-last layer down to the first hidden layer. Input
    /// units never receive an error term; nothing feeds into them.
    pub(crate) fn backpropagate_errors(&mut self) {
        for k in (1..self.layers.len() - 1).rev() {
            let (head, tail) = self.layers.split_at_mut(k + 1);
            let next = &tail[0];
            for unit in head[k].units.iter_mut() {
                let weighted: f64 = unit
                    .weights
                    .iter()
                    .zip(next.units.iter())
                    .map(|(w, n)| w * n.error)
                    .sum();
                unit.error = unit.activation * (1.0 - unit.activation) * weighted;
            }
        }
    }

    /// Applies the per-sample correction `w[j] += lr * y * error_j`
    /// immediately, for every outgoing weight in the network.
    pub(crate) fn correct_weights(&mut self, learning_rate: f64) {
        self.visit_outgoing(|y, error, weight, _pending| {
            *weight += learning_rate * y * error;
        });
    }

    /// Accumulates the same correction into `pending` instead of
    /// applying it; used by the batch disciplines.
    pub(crate) fn accumulate_corrections(&mut self, learning_rate: f64) {
        self.visit_outgoing(|y, error, _weight, pending| {
            *pending += learning_rate * y * error;
        });
    }

    /// Flushes every accumulator: `w += pending; pending = 0`.
    pub(crate) fn apply_accumulated(&mut self) {
        self.visit_outgoing(|_y, _error, weight, pending| {
            *weight += *pending;
            *pending = 0.0;
        });
    }

    /// Walks every outgoing edge `(unit in layer k) -> (unit j in layer
    /// k+1)` and hands the closure the source activation, the target
    /// unit's error term, and the edge's weight and accumulator slots.
    fn visit_outgoing(&mut self, mut f: impl FnMut(f64, f64, &mut f64, &mut f64)) {
        for k in 0..self.layers.len() - 1 {
            let (head, tail) = self.layers.split_at_mut(k + 1);
            let next = &tail[0];
            for unit in head[k].units.iter_mut() {
                let y = unit.activation;
                for (j, (weight, pending)) in unit
                    .weights
                    .iter_mut()
                    .zip(unit.pending.iter_mut())
                    .enumerate()
                {
                    f(y, next.units[j].error, weight, pending);
                }
            }
        }
    }
}
