use crate::error::NnError;

/// Parses an `x`-separated architecture descriptor such as `"20x5x3x5"`
/// into the ordered list of layer sizes, input layer first.
///
/// The descriptor must name at least two layers and every size must be a
/// positive integer. Whether the input layer fits the landmark count is
/// checked later by `Network::new`, which knows M.
pub fn parse_architecture(descriptor: &str) -> Result<Vec<usize>, NnError> {
    let mut sizes = Vec::new();
    for token in descriptor.split('x') {
        let size: usize = token.trim().parse().map_err(|_| NnError::InvalidArchitecture {
            reason: format!("invalid layer size: {:?}", token),
        })?;
        if size == 0 {
            return Err(NnError::InvalidArchitecture {
                reason: "layer sizes must be positive".to_string(),
            });
        }
        sizes.push(size);
    }
    if sizes.len() < 2 {
        return Err(NnError::InvalidArchitecture {
            reason: "need at least an input and an output layer".to_string(),
        });
    }
    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_layer_sizes() {
        assert_eq!(parse_architecture("20x5x3x5").unwrap(), vec![20, 5, 3, 5]);
        assert_eq!(parse_architecture("4x2").unwrap(), vec![4, 2]);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_architecture("20xfivex5"),
            Err(NnError::InvalidArchitecture { .. })
        ));
        assert!(matches!(
            parse_architecture(""),
            Err(NnError::InvalidArchitecture { .. })
        ));
    }

    #[test]
    fn rejects_zero_and_single_layer() {
        assert!(matches!(
            parse_architecture("20x0x5"),
            Err(NnError::InvalidArchitecture { .. })
        ));
        assert!(matches!(
            parse_architecture("20"),
            Err(NnError::InvalidArchitecture { .. })
        ));
    }
}
