use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::data::label::Label;
use crate::error::NnError;
use crate::gesture::feature::FeatureVector;
use crate::gesture::normalizer::GestureNormalizer;
use crate::gesture::point::Point;

/// Collects labeled raw gestures during sample capture and appends their
/// normalized representations to the sample file.
///
/// Records follow the loader's schema: each one starts on a fresh line
/// and holds the M landmark coordinates followed by the positional
/// one-hot target for its label.
#[derive(Debug)]
pub struct GestureStore {
    normalizer: GestureNormalizer,
    gestures: HashMap<Label, Vec<Vec<Point>>>,
}

impl GestureStore {
    pub fn new(normalizer: GestureNormalizer) -> GestureStore {
        GestureStore {
            normalizer,
            gestures: HashMap::new(),
        }
    }

    /// Queues one raw gesture under `label`.
    pub fn add_gesture(&mut self, points: Vec<Point>, label: Label) {
        self.gestures.entry(label).or_default().push(points);
    }

    /// Number of gestures queued across all labels.
    pub fn len(&self) -> usize {
        self.gestures.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends every queued gesture to the sample file, label by label in
    /// class-index order, and returns the number of records written.
    ///
    /// Degenerate gestures cannot be normalized; they are logged and
    /// skipped so one bad capture does not lose the rest of the batch.
    pub fn store_all(&self, path: impl AsRef<Path>) -> Result<usize, NnError> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| NnError::SampleSinkUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        let mut written = 0;
        for label in Label::ALL {
            let gestures = match self.gestures.get(&label) {
                Some(gestures) => gestures,
                None => continue,
            };
            for gesture in gestures {
                let feature = match self.normalizer.normalize(gesture) {
                    Ok(feature) => feature,
                    Err(_) => {
                        log::warn!("skipping degenerate {} gesture", label);
                        continue;
                    }
                };
                write_record(&mut file, &feature, label).map_err(|source| {
                    NnError::SampleSinkUnavailable {
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
                written += 1;
            }
        }
        Ok(written)
    }
}

fn write_record(
    file: &mut impl Write,
    feature: &FeatureVector,
    label: Label,
) -> std::io::Result<()> {
    write!(file, "\n")?;
    for p in feature.points() {
        write!(file, " {} {}", p.x, p.y)?;
    }
    for t in label.one_hot() {
        write!(file, " {}", t as i64)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_samples;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("glyph-nn-{}-{}", std::process::id(), name))
    }

    fn diagonal(offset: f64) -> Vec<Point> {
        (0..20)
            .map(|i| Point::new(i as f64 + offset, i as f64 * 2.0))
            .collect()
    }

    #[test]
    fn stored_records_round_trip_through_loader() {
        let path = temp_file("roundtrip.txt");
        let _ = std::fs::remove_file(&path);

        let mut store = GestureStore::new(GestureNormalizer::new(4));
        store.add_gesture(diagonal(0.0), Label::Alpha);
        store.add_gesture(diagonal(5.0), Label::Gamma);
        assert_eq!(store.store_all(&path).unwrap(), 2);

        let samples = load_samples(&path, 4, Label::COUNT).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].input.len(), 8);
        assert_eq!(samples[0].target, Label::Alpha.one_hot());
        assert_eq!(samples[1].target, Label::Gamma.one_hot());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn records_start_on_fresh_lines() {
        let path = temp_file("schema.txt");
        let _ = std::fs::remove_file(&path);

        let mut store = GestureStore::new(GestureNormalizer::new(3));
        store.add_gesture(diagonal(0.0), Label::Beta);
        store.store_all(&path).unwrap();
        store.store_all(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with('\n'));
        assert_eq!(text.matches('\n').count(), 2);
        assert!(text.contains(" 0 1 0 0 0"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn degenerate_gestures_are_skipped() {
        let path = temp_file("degenerate.txt");
        let _ = std::fs::remove_file(&path);

        let mut store = GestureStore::new(GestureNormalizer::new(4));
        store.add_gesture(vec![Point::new(1.0, 1.0); 8], Label::Delta);
        store.add_gesture(diagonal(0.0), Label::Delta);
        assert_eq!(store.store_all(&path).unwrap(), 1);

        std::fs::remove_file(&path).unwrap();
    }
}
