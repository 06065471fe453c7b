use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use health_prediction::{RunConfig, parse_predict_arg, run};

const DEFAULT_DATA_PATH: &str = "mental_health_wearable_data.csv";

fn main() -> Result<()> {
    env_logger::init();

    let path = PathBuf::from(
        env::var("DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string()),
    );

    let predict_value = match env::args().nth(1) {
        Some(raw) => Some(parse_predict_arg(&raw)?),
        None => None,
    };

    let cfg = RunConfig::default();
    let report = run(&path, predict_value, &cfg)
        .with_context(|| format!("pipeline failed for {}", path.display()))?;

    println!("Accuracy: {}", report.accuracy());
    if let Some(label) = report.prediction() {
        println!("Predicted Health: {label}");
    }

    Ok(())
}
