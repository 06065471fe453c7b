mod data;
mod error;
mod logistic;
mod metrics;
mod model;
mod split;

pub use data::Dataset;
pub use error::{MlError, Result};
pub use logistic::LogisticRegression;
pub use metrics::accuracy;
pub use model::Classifier;
pub use split::train_test_split;
