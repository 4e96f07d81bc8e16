use serde::{Deserialize, Serialize};
use std::sync::mpsc;

use crate::error::{Error, Result};
use crate::train::loss_report::LossReport;

/// Hyperparameters for one training run.
///
/// # Fields
/// - `n_hidden`    — number of sigmoid units in the hidden layer
/// - `epochs`      — full passes over the training data; one update each
/// - `learnrate`   — step size applied to the averaged gradient
/// - `seed`        — seeds the run's own RNG for weight initialization
/// - `progress_tx` — optional channel; every periodic `LossReport` is sent on
///                   it. A dropped receiver does not stop training.
///
/// Fields missing from a JSON file take their values from `Default`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub n_hidden: usize,
    pub epochs: usize,
    pub learnrate: f64,
    pub seed: u64,
    #[serde(skip)]
    pub progress_tx: Option<mpsc::Sender<LossReport>>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            n_hidden: 2,
            epochs: 900,
            learnrate: 0.005,
            seed: 21,
            progress_tx: None,
        }
    }
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel.
    pub fn new(n_hidden: usize, epochs: usize, learnrate: f64, seed: u64) -> Self {
        TrainConfig {
            n_hidden,
            epochs,
            learnrate,
            seed,
            progress_tx: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_hidden == 0 {
            return Err(Error::InvalidHyperparameter {
                name: "n_hidden",
                reason: "must be at least 1".into(),
            });
        }
        if self.epochs == 0 {
            return Err(Error::InvalidHyperparameter {
                name: "epochs",
                reason: "must be at least 1".into(),
            });
        }
        if !(self.learnrate.is_finite() && self.learnrate > 0.0) {
            return Err(Error::InvalidHyperparameter {
                name: "learnrate",
                reason: format!("must be a finite positive number, got {}", self.learnrate),
            });
        }
        Ok(())
    }

    /// Epochs between loss reports: a tenth of the run, never less than one.
    pub fn report_interval(&self) -> usize {
        (self.epochs / 10).max(1)
    }

    /// Serializes the hyperparameters to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads hyperparameters from a JSON file and validates them.
    pub fn load_json(path: &str) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
