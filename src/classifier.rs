use crate::data::label::Label;
use crate::error::NnError;
use crate::gesture::feature::FeatureVector;
use crate::gesture::normalizer::GestureNormalizer;
use crate::gesture::point::Point;
use crate::network::network::Network;

/// Runs a trained network forward and maps its output vector to a
/// discrete gesture label.
///
/// Holds a mutable borrow of the network because a forward pass stores
/// activations; the network stays caller-owned.
pub struct Classifier<'a> {
    network: &'a mut Network,
}

impl<'a> Classifier<'a> {
    pub fn new(network: &'a mut Network) -> Classifier<'a> {
        Classifier { network }
    }

    /// Classifies a normalized gesture.
    ///
    /// Fails with [`NnError::NotTrained`] until a training run has
    /// converged on the network. The winning class is the output unit
    /// with the strictly largest activation; on ties the
    /// first-encountered (lowest-indexed) class wins.
    pub fn infer(&mut self, feature: &FeatureVector) -> Result<Label, NnError> {
        if !self.network.is_trained() {
            return Err(NnError::NotTrained);
        }

        let output = self.network.forward(&feature.flatten());
        let mut max_index = 0;
        for (i, &value) in output.iter().enumerate() {
            if value > output[max_index] {
                max_index = i;
            }
        }
        Ok(Label::from_index(max_index))
    }

    /// Classifies a raw pointer trace as captured by a drawing surface:
    /// normalizes it with `normalizer`, then runs [`Classifier::infer`].
    pub fn infer_raw(
        &mut self,
        normalizer: &GestureNormalizer,
        raw: &[Point],
    ) -> Result<Label, NnError> {
        let feature = normalizer.normalize(raw)?;
        self.infer(&feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::Sample;
    use crate::gesture::point::Point;
    use crate::train::train_config::TrainConfig;
    use crate::train::trainer::train;
    use crate::train::update::UpdateDiscipline;

    fn feature(coords: &[(f64, f64)]) -> FeatureVector {
        FeatureVector::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    fn infer_before_training_fails() {
        let mut network = Network::new(&[4, 3, 2], 2).unwrap();
        let mut classifier = Classifier::new(&mut network);
        let err = classifier
            .infer(&feature(&[(0.0, 0.0), (1.0, 1.0)]))
            .unwrap_err();
        assert!(matches!(err, NnError::NotTrained));
    }

    #[test]
    fn infer_raw_normalizes_before_the_trained_check() {
        let mut network = Network::new(&[4, 3, 2], 2).unwrap();
        let mut classifier = Classifier::new(&mut network);
        let normalizer = GestureNormalizer::new(2);

        let trace: Vec<Point> = (0..10).map(|i| Point::new(i as f64, 2.0)).collect();
        let err = classifier.infer_raw(&normalizer, &trace).unwrap_err();
        assert!(matches!(err, NnError::NotTrained));

        let flat = vec![Point::new(1.0, 1.0); 4];
        let err = classifier.infer_raw(&normalizer, &flat).unwrap_err();
        assert!(matches!(err, NnError::DegenerateGesture));
    }

    #[test]
    fn ties_resolve_to_the_lowest_index() {
        // Identical weights on every edge make both outputs equal for
        // any input, forcing the tie-break path.
        let mut network = Network::new(&[2, 2], 1).unwrap();
        for unit in network.layers[0].units.iter_mut() {
            unit.weights = vec![0.5, 0.5];
        }
        network.mark_trained();

        let mut classifier = Classifier::new(&mut network);
        let label = classifier.infer(&feature(&[(0.3, 0.7)])).unwrap();
        assert_eq!(label, Label::Alpha);
    }

    #[test]
    fn trained_network_classifies_both_samples() {
        let samples = vec![
            Sample::new(vec![0.0, 0.0, 1.0, 1.0], vec![1.0, 0.0]),
            Sample::new(vec![1.0, 1.0, 0.0, 0.0], vec![0.0, 1.0]),
        ];
        let mut network = Network::new(&[4, 3, 2], 2).unwrap();
        let mut config = TrainConfig::new(0.5, 0.05, UpdateDiscipline::PerSample);
        config.max_epochs = Some(50_000);
        let summary = train(&mut network, &samples, &config).unwrap();
        assert!(summary.converged);

        let mut classifier = Classifier::new(&mut network);
        let a = classifier
            .infer(&feature(&[(0.0, 0.0), (1.0, 1.0)]))
            .unwrap();
        assert_eq!(a, Label::Alpha);
        let b = classifier
            .infer(&feature(&[(1.0, 1.0), (0.0, 0.0)]))
            .unwrap();
        assert_eq!(b, Label::Beta);
    }
}
