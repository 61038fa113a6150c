use std::fs;
use std::path::Path;

use crate::data::sample::Sample;
use crate::error::NnError;

/// Reads the whitespace-delimited sample file into memory.
///
/// Each non-blank line is one record:
/// `x0 y0 .. x(M-1) y(M-1) t0 .. t(C-1)` — `2*m` float coordinates
/// followed by `class_count` 0/1 integers. Blank lines are skipped (the
/// sink writes a newline before every record). Malformed records fail
/// with [`NnError::SampleFormat`] carrying the 1-based line number.
pub fn load_samples(
    path: impl AsRef<Path>,
    m: usize,
    class_count: usize,
) -> Result<Vec<Sample>, NnError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| NnError::SampleSourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_samples(&text, m, class_count)
}

fn parse_samples(text: &str, m: usize, class_count: usize) -> Result<Vec<Sample>, NnError> {
    let mut samples = Vec::new();
    for (line_index, line) in text.lines().enumerate() {
        let line_no = line_index + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != 2 * m + class_count {
            return Err(NnError::SampleFormat {
                line: line_no,
                reason: format!(
                    "expected {} values, found {}",
                    2 * m + class_count,
                    tokens.len()
                ),
            });
        }

        let mut input = Vec::with_capacity(2 * m);
        for token in &tokens[..2 * m] {
            let value: f64 = token.parse().map_err(|_| NnError::SampleFormat {
                line: line_no,
                reason: format!("invalid coordinate: {}", token),
            })?;
            input.push(value);
        }

        let mut target = Vec::with_capacity(class_count);
        for token in &tokens[2 * m..] {
            let value: i64 = token.parse().map_err(|_| NnError::SampleFormat {
                line: line_no,
                reason: format!("invalid target value: {}", token),
            })?;
            target.push(value as f64);
        }

        samples.push(Sample::new(input, target));
    }
    Ok(samples)
}
