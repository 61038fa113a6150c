use crate::data::label::Label;
use crate::gesture::feature::FeatureVector;

/// One labeled training example: a flattened feature vector paired with
/// its one-hot target. Immutable once built; the trainer only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Sample {
        Sample { input, target }
    }

    /// Builds a sample from a normalized gesture and its class.
    pub fn from_feature(feature: &FeatureVector, label: Label) -> Sample {
        Sample {
            input: feature.flatten(),
            target: label.one_hot(),
        }
    }
}
