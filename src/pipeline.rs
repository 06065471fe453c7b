use std::path::Path;

use log::info;
use ml_core::{Classifier, LogisticRegression, accuracy, train_test_split};
use rand::{SeedableRng, rngs::StdRng};

use crate::{PipelineErr, Result, RunConfig, loader};

/// Outcome of one pipeline run.
#[derive(Debug, Clone)]
pub struct RunReport {
    accuracy: f32,
    prediction: Option<String>,
}

impl RunReport {
    /// Returns the accuracy over the held-out partition, in `[0.0, 1.0]`.
    pub fn accuracy(&self) -> f32 {
        self.accuracy
    }

    /// Returns the predicted label, when a value was supplied.
    pub fn prediction(&self) -> Option<&str> {
        self.prediction.as_deref()
    }
}

/// Parses the optional CLI value into a feature.
///
/// # Errors
/// Returns `PipelineErr::InvalidArgument` if `raw` is not a decimal number.
pub fn parse_predict_arg(raw: &str) -> Result<f32> {
    raw.trim().parse().map_err(|_| {
        PipelineErr::InvalidArgument(format!("expected a decimal number, got {raw:?}"))
    })
}

/// Runs the full pipeline with a logistic-regression classifier built from
/// the configuration.
///
/// # Errors
/// See [`run_with`].
pub fn run(path: &Path, predict_value: Option<f32>, cfg: &RunConfig) -> Result<RunReport> {
    let mut model = LogisticRegression::new()
        .with_learning_rate(cfg.learning_rate())
        .with_max_epochs(cfg.max_epochs())
        .with_tolerance(cfg.tolerance());

    run_with(path, predict_value, cfg, &mut model)
}

/// Runs the full pipeline with a caller-supplied classifier: load the
/// dataset, split it, fit on the training partition, evaluate on the
/// held-out partition, and optionally predict for one value.
///
/// # Arguments
/// * `path` - Location of the CSV dataset.
/// * `predict_value` - Optional feature value to classify after evaluation.
/// * `cfg` - Split and training tunables.
/// * `model` - The classifier to fit and query.
///
/// # Errors
/// Loader errors for an unreadable or malformed dataset, `PipelineErr::Ml`
/// for split, training, or evaluation failures, and
/// `PipelineErr::InvalidArgument` when the model predicts a class the
/// dataset has no label for.
pub fn run_with<C>(
    path: &Path,
    predict_value: Option<f32>,
    cfg: &RunConfig,
    model: &mut C,
) -> Result<RunReport>
where
    C: Classifier,
{
    let data = loader::load_dataset(path)?;
    info!("loaded {} rows from {}", data.len(), path.display());

    let mut rng = match cfg.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (train, test) = train_test_split(&data, cfg.test_fraction(), &mut rng)?;
    info!(train = train.len(), test = test.len(); "partitioned dataset");

    model.fit(train.features(), train.targets())?;

    let predicted = test
        .features()
        .iter()
        .map(|&x| model.predict(x))
        .collect::<ml_core::Result<Vec<_>>>()?;
    let accuracy = accuracy(&predicted, test.targets())?;
    info!("held-out accuracy: {accuracy}");

    let prediction = match predict_value {
        Some(value) => {
            let class = model.predict(value)?;
            let label = data.label_of(class).ok_or_else(|| {
                PipelineErr::InvalidArgument(format!(
                    "predicted class {class} has no label in the dataset"
                ))
            })?;
            Some(label.to_string())
        }
        None => None,
    };

    Ok(RunReport {
        accuracy,
        prediction,
    })
}
