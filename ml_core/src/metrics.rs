use crate::{MlError, Result};

/// Computes the fraction of predictions that match the actual targets.
///
/// # Arguments
/// * `predicted` - Predicted class indices.
/// * `actual` - True class indices, aligned with `predicted`.
///
/// # Returns
/// A value in `[0.0, 1.0]`.
///
/// # Errors
/// Returns `MlError::ShapeMismatch` when the slices differ in length and
/// `MlError::InvalidInput` when they are empty.
pub fn accuracy(predicted: &[usize], actual: &[usize]) -> Result<f32> {
    if predicted.len() != actual.len() {
        return Err(MlError::ShapeMismatch {
            what: "predictions",
            got: predicted.len(),
            expected: actual.len(),
        });
    }
    if actual.is_empty() {
        return Err(MlError::InvalidInput(
            "accuracy needs at least one sample",
        ));
    }

    let hits = predicted
        .iter()
        .zip(actual)
        .filter(|(p, a)| p == a)
        .count();

    Ok(hits as f32 / actual.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_matching_fractions() {
        assert_eq!(accuracy(&[0, 1, 1, 0], &[0, 1, 0, 1]).unwrap(), 0.5);
        assert_eq!(accuracy(&[1, 1], &[1, 1]).unwrap(), 1.0);
        assert_eq!(accuracy(&[0], &[1]).unwrap(), 0.0);
    }

    #[test]
    fn stays_within_the_unit_interval() {
        let acc = accuracy(&[0, 1, 0], &[1, 1, 0]).unwrap();
        assert!((0.0..=1.0).contains(&acc));
    }

    #[test]
    fn rejects_misaligned_slices() {
        let err = accuracy(&[0, 1], &[0]).unwrap_err();
        assert!(matches!(err, MlError::ShapeMismatch { .. }));
    }

    #[test]
    fn rejects_empty_slices() {
        assert!(matches!(
            accuracy(&[], &[]),
            Err(MlError::InvalidInput(_))
        ));
    }
}
