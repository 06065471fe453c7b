use ndarray::Array1;

use crate::{Classifier, MlError, Result};

const DEFAULT_LEARNING_RATE: f32 = 0.1;
const DEFAULT_MAX_EPOCHS: usize = 1000;
const DEFAULT_TOLERANCE: f32 = 1e-6;

// Keeps the log-loss finite when a probability saturates.
const LOSS_EPS: f32 = 1e-7;

/// Single-feature binary logistic regression.
///
/// Trained with batch gradient descent on binary cross-entropy. The feature
/// is standardized internally with statistics learned from the training
/// partition, so raw readings (e.g. heart rates around 60-120) train stably
/// without caller-side scaling.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    learning_rate: f32,
    max_epochs: usize,
    tolerance: f32,
    fitted: Option<Fitted>,
}

#[derive(Debug, Clone, Copy)]
struct Fitted {
    weight: f32,
    bias: f32,
    mean: f32,
    std: f32,
}

fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}

fn log_loss(probs: &Array1<f32>, targets: &Array1<f32>) -> f32 {
    let n = probs.len() as f32;
    let total: f32 = probs
        .iter()
        .zip(targets)
        .map(|(&p, &y)| -(y * (p + LOSS_EPS).ln() + (1.0 - y) * (1.0 - p + LOSS_EPS).ln()))
        .sum();
    total / n
}

impl LogisticRegression {
    /// Creates an unfitted model with default tunables.
    pub fn new() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            max_epochs: DEFAULT_MAX_EPOCHS,
            tolerance: DEFAULT_TOLERANCE,
            fitted: None,
        }
    }

    /// Sets the gradient-descent step size.
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the maximum number of training epochs.
    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    /// Sets the early-stop threshold on the per-epoch loss delta.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    fn decision(&self, feature: f32) -> Result<f32> {
        let fitted = self.fitted.as_ref().ok_or(MlError::NotFitted)?;
        if !feature.is_finite() {
            return Err(MlError::InvalidInput("feature must be a finite number"));
        }

        let z = fitted.weight * ((feature - fitted.mean) / fitted.std) + fitted.bias;
        Ok(sigmoid(z))
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for LogisticRegression {
    fn fit(&mut self, features: &[f32], targets: &[usize]) -> Result<()> {
        if features.len() != targets.len() {
            return Err(MlError::ShapeMismatch {
                what: "targets",
                got: targets.len(),
                expected: features.len(),
            });
        }
        if features.is_empty() {
            return Err(MlError::InvalidInput("training set is empty"));
        }
        if targets.iter().any(|&t| t > 1) {
            return Err(MlError::InvalidInput(
                "targets must be binary class indices",
            ));
        }

        let x = Array1::from_iter(features.iter().copied());
        let y = Array1::from_iter(targets.iter().map(|&t| t as f32));

        let mean = x.mean().unwrap_or(0.0);
        let std = {
            let s = x.std(0.0);
            // A constant feature column standardizes to all zeros.
            if s > 0.0 { s } else { 1.0 }
        };
        let xs = x.mapv(|v| (v - mean) / std);

        let n = xs.len() as f32;
        let mut weight = 0.0_f32;
        let mut bias = 0.0_f32;
        let mut prev_loss = f32::INFINITY;

        for epoch in 0..self.max_epochs {
            let probs = xs.mapv(|v| sigmoid(weight * v + bias));
            let err = &probs - &y;

            weight -= self.learning_rate * (&err * &xs).sum() / n;
            bias -= self.learning_rate * err.sum() / n;

            let loss = log_loss(&probs, &y);
            if !loss.is_finite() {
                return Err(MlError::Convergence { epoch, loss });
            }
            if (prev_loss - loss).abs() < self.tolerance {
                break;
            }
            prev_loss = loss;
        }

        self.fitted = Some(Fitted {
            weight,
            bias,
            mean,
            std,
        });

        Ok(())
    }

    fn predict(&self, feature: f32) -> Result<usize> {
        let p = self.decision(feature)?;
        Ok(usize::from(p >= 0.5))
    }

    fn predict_proba(&self, feature: f32) -> Result<f32> {
        self.decision(feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Resting readings on one side of ~82 bpm, elevated on the other.
    const FEATURES: [f32; 6] = [60.0, 65.0, 70.0, 95.0, 100.0, 105.0];
    const TARGETS: [usize; 6] = [0, 0, 0, 1, 1, 1];

    fn fitted() -> LogisticRegression {
        let mut model = LogisticRegression::new();
        model.fit(&FEATURES, &TARGETS).unwrap();
        model
    }

    #[test]
    fn separable_classes_are_learned_exactly() {
        let model = fitted();

        for (&x, &t) in FEATURES.iter().zip(&TARGETS) {
            assert_eq!(model.predict(x).unwrap(), t, "feature {x}");
        }
    }

    #[test]
    fn nearby_values_take_the_class_of_their_neighbors() {
        let model = fitted();

        assert_eq!(model.predict(80.0).unwrap(), 0);
        assert_eq!(model.predict(90.0).unwrap(), 1);
    }

    #[test]
    fn probabilities_stay_in_the_unit_interval() {
        let model = fitted();

        for x in [0.0, 60.0, 82.5, 105.0, 500.0] {
            let p = model.predict_proba(x).unwrap();
            assert!((0.0..=1.0).contains(&p), "p({x}) = {p}");
        }
    }

    #[test]
    fn predicting_before_fitting_fails() {
        let model = LogisticRegression::new();
        assert!(matches!(model.predict(80.0), Err(MlError::NotFitted)));
    }

    #[test]
    fn non_finite_features_are_rejected() {
        let model = fitted();
        assert!(matches!(
            model.predict(f32::NAN),
            Err(MlError::InvalidInput(_))
        ));
    }

    #[test]
    fn misaligned_training_slices_are_rejected() {
        let mut model = LogisticRegression::new();
        let err = model.fit(&[60.0, 100.0], &[0]).unwrap_err();
        assert!(matches!(err, MlError::ShapeMismatch { .. }));
    }

    #[test]
    fn empty_training_set_is_rejected() {
        let mut model = LogisticRegression::new();
        assert!(matches!(
            model.fit(&[], &[]),
            Err(MlError::InvalidInput(_))
        ));
    }

    #[test]
    fn non_binary_targets_are_rejected() {
        let mut model = LogisticRegression::new();
        assert!(matches!(
            model.fit(&[60.0, 100.0], &[0, 2]),
            Err(MlError::InvalidInput(_))
        ));
    }

    #[test]
    fn constant_features_still_fit() {
        let mut model = LogisticRegression::new();
        model.fit(&[75.0, 75.0, 75.0, 75.0], &[0, 0, 1, 1]).unwrap();

        // With no signal the probability sits at the class balance.
        let p = model.predict_proba(75.0).unwrap();
        assert!((p - 0.5).abs() < 0.1, "p = {p}");
    }
}
