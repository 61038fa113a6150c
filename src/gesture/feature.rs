use crate::gesture::point::Point;

/// A normalized gesture: exactly M landmark points, translation- and
/// scale-invariant, each coordinate in [-1, 1].
///
/// Only `GestureNormalizer` constructs these, so holding a
/// `FeatureVector` is proof the landmark count matches the normalizer
/// it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    points: Vec<Point>,
}

impl FeatureVector {
    pub(crate) fn new(points: Vec<Point>) -> FeatureVector {
        FeatureVector { points }
    }

    /// Number of landmark points (M).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Interleaves coordinates into the network's input format:
    /// `[x0, y0, x1, y1, ...]`, length 2M.
    pub fn flatten(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(self.points.len() * 2);
        for p in &self.points {
            flat.push(p.x);
            flat.push(p.y);
        }
        flat
    }
}
