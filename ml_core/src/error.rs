use std::{error::Error, fmt};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, MlError>;

/// Errors produced while building datasets, training, or evaluating.
#[derive(Debug)]
pub enum MlError {
    /// An input is invalid for semantic or domain reasons.
    InvalidInput(&'static str),

    /// A shape invariant was violated (e.g. mismatched lengths).
    ShapeMismatch {
        /// Human-readable context for the mismatch (e.g. "targets", "predictions").
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value.
        expected: usize,
    },

    /// Training produced a non-finite loss.
    Convergence {
        /// Epoch at which the loss became non-finite.
        epoch: usize,
        /// The offending loss value.
        loss: f32,
    },

    /// The model was asked to predict before being fitted.
    NotFitted,
}

impl fmt::Display for MlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            MlError::ShapeMismatch {
                what,
                got,
                expected,
            } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
            MlError::Convergence { epoch, loss } => {
                write!(f, "training diverged at epoch {epoch}: loss is {loss}")
            }
            MlError::NotFitted => write!(f, "model has not been fitted"),
        }
    }
}

impl Error for MlError {}
