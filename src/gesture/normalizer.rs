use crate::error::NnError;
use crate::gesture::feature::FeatureVector;
use crate::gesture::point::Point;

/// Converts a raw ordered pointer trace into a fixed-length feature
/// vector of M landmark points.
///
/// The pipeline is: recenter on the centroid (translation invariance),
/// divide by the largest absolute coordinate (scale invariance, result
/// bounded in [-1, 1]), then resample down to M points spaced by equal
/// fractions of the total polyline length.
#[derive(Debug, Clone, Copy)]
pub struct GestureNormalizer {
    m: usize,
}

impl GestureNormalizer {
    /// `points_per_gesture` is M, the landmark count. Must be at least 2
    /// so the resampler can pin both endpoints.
    pub fn new(points_per_gesture: usize) -> GestureNormalizer {
        assert!(points_per_gesture >= 2, "need at least two landmark points");
        GestureNormalizer {
            m: points_per_gesture,
        }
    }

    /// Landmark count M.
    pub fn points_per_gesture(&self) -> usize {
        self.m
    }

    /// Normalizes `raw` into exactly M landmark points.
    ///
    /// Fails with [`NnError::DegenerateGesture`] when the trace has fewer
    /// than two points or all points coincide: such a gesture has no
    /// extent to scale by.
    pub fn normalize(&self, raw: &[Point]) -> Result<FeatureVector, NnError> {
        if raw.len() < 2 {
            return Err(NnError::DegenerateGesture);
        }

        let centroid = centroid(raw);
        let mut g: Vec<Point> = raw
            .iter()
            .map(|p| Point::new(p.x - centroid.x, p.y - centroid.y))
            .collect();

        // Largest absolute coordinate after recentering; zero means every
        // point sat on the centroid.
        let s = g
            .iter()
            .fold(0.0_f64, |max, p| max.max(p.x.abs()).max(p.y.abs()));
        if s == 0.0 {
            return Err(NnError::DegenerateGesture);
        }
        for p in &mut g {
            p.x /= s;
            p.y /= s;
        }

        Ok(FeatureVector::new(self.resample(&g)))
    }

    /// Picks M representative points along the trace.
    ///
    /// For landmark `k` the target offset is `l = k*D/(M-1)` where `D` is
    /// the total polyline length. The cursor walks forward (never back)
    /// past every point whose straight-line distance from the trace start
    /// is still within `l`, and the last such point is emitted. Landmark 0
    /// is therefore the first trace point and landmark M-1 the last.
    fn resample(&self, g: &[Point]) -> Vec<Point> {
        let d = polyline_length(g);
        let start = g[0];
        let mut landmarks = Vec::with_capacity(self.m);
        let mut i = 0;
        for k in 0..self.m {
            let l = (k as f64 * d) / (self.m as f64 - 1.0);
            while i < g.len() && start.distance(&g[i]) <= l {
                i += 1;
            }
            landmarks.push(g[i - 1]);
        }
        landmarks
    }
}

fn centroid(points: &[Point]) -> Point {
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for p in points {
        sum_x += p.x;
        sum_y += p.y;
    }
    let n = points.len() as f64;
    Point::new(sum_x / n, sum_y / n)
}

fn polyline_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance(&pair[1]))
        .sum()
}
