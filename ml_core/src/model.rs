use crate::Result;

/// A binary classifier over a single scalar feature.
///
/// This trait is the policy boundary between the pipeline and the statistical
/// model: the pipeline only needs something it can fit on a training
/// partition and query for single-value predictions. Tests substitute a
/// double behind it.
pub trait Classifier {
    /// Fits the classifier on aligned feature/target slices.
    ///
    /// # Arguments
    /// * `features` - One scalar feature per training row.
    /// * `targets` - Class index (0 or 1) per row, aligned with `features`.
    ///
    /// # Errors
    /// Returns `MlError::ShapeMismatch` when the slices differ in length,
    /// `MlError::InvalidInput` for invalid domain inputs, and
    /// `MlError::Convergence` when training fails to produce a finite loss.
    fn fit(&mut self, features: &[f32], targets: &[usize]) -> Result<()>;

    /// Predicts the class index for one feature value.
    ///
    /// # Errors
    /// Returns `MlError::NotFitted` before a successful `fit`, and
    /// `MlError::InvalidInput` if `feature` is not finite.
    fn predict(&self, feature: f32) -> Result<usize>;

    /// Returns the probability of class 1 for one feature value.
    ///
    /// # Errors
    /// Same conditions as [`Classifier::predict`].
    fn predict_proba(&self, feature: f32) -> Result<f32>;
}
