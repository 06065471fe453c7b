/// Tunables for one pipeline run.
///
/// Defaults mirror the usual one-shot batch setup: a 20% held-out test
/// partition and an unseeded split, so repeated runs over the same file may
/// report different accuracies.
#[derive(Debug, Clone)]
pub struct RunConfig {
    test_fraction: f32,
    seed: Option<u64>,
    learning_rate: f32,
    max_epochs: usize,
    tolerance: f32,
}

impl RunConfig {
    /// Sets the fraction of rows held out for evaluation.
    pub fn with_test_fraction(mut self, test_fraction: f32) -> Self {
        self.test_fraction = test_fraction;
        self
    }

    /// Fixes the split RNG seed, making partitions reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the classifier's gradient-descent step size.
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the classifier's training epoch budget.
    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    /// Sets the classifier's early-stop tolerance.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the held-out fraction.
    pub fn test_fraction(&self) -> f32 {
        self.test_fraction
    }

    /// Returns the split seed, if one was fixed.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the gradient-descent step size.
    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    /// Returns the training epoch budget.
    pub fn max_epochs(&self) -> usize {
        self.max_epochs
    }

    /// Returns the early-stop tolerance.
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: None,
            learning_rate: 0.1,
            max_epochs: 1000,
            tolerance: 1e-6,
        }
    }
}
