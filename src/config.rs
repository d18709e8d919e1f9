use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::network::spec::ModelSpec;
use crate::train::train_config::TrainConfig;

/// Everything needed to start a training run: the model to build, how long
/// to train it, and an optional RNG seed for the initial weights.
///
/// ```json
/// {
///   "model": { "layer_sizes": [3, 1], "learning_rate": 0.01, "activation": "Identity" },
///   "training": { "epochs": 100, "report_count": 5 },
///   "seed": 42
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub model: ModelSpec,
    pub training: TrainConfig,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn load_json(path: impl AsRef<Path>) -> Result<RunConfig> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

/// The quadratic-fit run: one identity layer of three weights, 100 epochs,
/// five reports.
impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            model: ModelSpec::new(vec![3, 1], 0.01, ActivationFunction::Identity),
            training: TrainConfig::new(100, 5),
            seed: None,
        }
    }
}
