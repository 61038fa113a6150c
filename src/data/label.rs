use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of gesture classes the network distinguishes.
///
/// The one-hot encoding is positional: `Alpha` is class 0, `Epsilon`
/// class 4, and the target vector written to the sample file carries a 1
/// at exactly that index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Alpha,
    Beta,
    Gamma,
    Delta,
    Epsilon,
}

impl Label {
    /// Number of classes, which is also the expected output-layer size.
    pub const COUNT: usize = 5;

    /// All labels in class-index order.
    pub const ALL: [Label; Label::COUNT] = [
        Label::Alpha,
        Label::Beta,
        Label::Gamma,
        Label::Delta,
        Label::Epsilon,
    ];

    /// Position of this label in the one-hot target vector.
    pub fn index(self) -> usize {
        match self {
            Label::Alpha => 0,
            Label::Beta => 1,
            Label::Gamma => 2,
            Label::Delta => 3,
            Label::Epsilon => 4,
        }
    }

    /// Maps an output-vector index back to a label. Indices past the
    /// known classes collapse onto `Epsilon`, the final class.
    pub fn from_index(index: usize) -> Label {
        match index {
            0 => Label::Alpha,
            1 => Label::Beta,
            2 => Label::Gamma,
            3 => Label::Delta,
            _ => Label::Epsilon,
        }
    }

    /// One-hot target vector of length [`Label::COUNT`].
    pub fn one_hot(self) -> Vec<f64> {
        let mut target = vec![0.0; Label::COUNT];
        target[self.index()] = 1.0;
        target
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Label::Alpha => "alpha",
            Label::Beta => "beta",
            Label::Gamma => "gamma",
            Label::Delta => "delta",
            Label::Epsilon => "epsilon",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Label, String> {
        match s {
            "alpha" => Ok(Label::Alpha),
            "beta" => Ok(Label::Beta),
            "gamma" => Ok(Label::Gamma),
            "delta" => Ok(Label::Delta),
            "epsilon" => Ok(Label::Epsilon),
            other => Err(format!("unknown label: {}", other)),
        }
    }
}
