pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;

pub use config::RunConfig;
pub use error::{PipelineErr, Result};
pub use pipeline::{RunReport, parse_predict_arg, run, run_with};
