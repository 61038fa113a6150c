use std::f64::consts::E;

/// One computational node.
///
/// A unit owns the weights on its *outgoing* edges: `weights[j]` connects
/// it to unit `j` of the next layer, and `pending[j]` accumulates the
/// deferred correction for that same edge under the batch disciplines.
/// Both vectors are sized to the next layer at construction time;
/// output-layer units keep them empty.
#[derive(Debug, Clone)]
pub struct Unit {
    /// Activation from the most recent forward pass.
    pub activation: f64,
    /// Error term from the most recent backward pass.
    pub error: f64,
    /// Outgoing weights, one per unit in the next layer.
    pub weights: Vec<f64>,
    /// Accumulated weight corrections awaiting a batch flush.
    pub pending: Vec<f64>,
}

impl Unit {
    pub fn new(weights: Vec<f64>) -> Unit {
        let fan_out = weights.len();
        Unit {
            activation: 0.0,
            error: 0.0,
            weights,
            pending: vec![0.0; fan_out],
        }
    }
}

/// Logistic sigmoid, the network's only transfer function.
pub fn sigmoid(net: f64) -> f64 {
    1.0 / (1.0 + E.powf(-net))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_shape() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(4.0) > 0.9);
        assert!(sigmoid(-4.0) < 0.1);
        assert!(sigmoid(-4.0) > 0.0);
        assert!(sigmoid(4.0) < 1.0);
    }

    #[test]
    fn pending_matches_weight_shape() {
        let unit = Unit::new(vec![0.3, 0.7, 0.1]);
        assert_eq!(unit.pending, vec![0.0; 3]);
    }
}
