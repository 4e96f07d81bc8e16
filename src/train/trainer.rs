use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

use crate::data::Dataset;
use crate::error::Result;
use crate::loss::MseLoss;
use crate::network::TwoLayerNet;
use crate::optim::Sgd;
use crate::train::gradients::Gradients;
use crate::train::loss_report::LossReport;
use crate::train::monitor::LossMonitor;
use crate::train::train_config::TrainConfig;

/// Everything a finished run hands back.
#[derive(Debug, Clone)]
pub struct TrainReport {
    pub network: TwoLayerNet,
    pub losses: Vec<LossReport>,
}

/// Owns the weights for the lifetime of one run and drives the epoch loop.
///
/// Every epoch is one full-batch gradient step: per-sample gradients are
/// summed in data order, then a single averaged update is applied.
pub struct Trainer {
    network: TwoLayerNet,
    optimizer: Sgd,
    monitor: LossMonitor,
    epochs: usize,
    epochs_run: usize,
}

impl Trainer {
    /// Validates `config`, then initializes weights from a fresh RNG seeded
    /// with `config.seed`.
    pub fn new(data: &Dataset<'_>, config: TrainConfig) -> Result<Trainer> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let network = TwoLayerNet::init(data.n_features(), config.n_hidden, &mut rng);
        debug!(
            n_features = data.n_features(),
            n_hidden = config.n_hidden,
            seed = config.seed,
            "initialized weights"
        );
        Ok(Trainer::assemble(network, config))
    }

    /// Starts from caller-supplied weights; `config.n_hidden` and
    /// `config.seed` are ignored.
    pub fn with_network(network: TwoLayerNet, config: TrainConfig) -> Result<Trainer> {
        TrainConfig {
            n_hidden: network.n_hidden(),
            ..config.clone()
        }
        .validate()?;
        Ok(Trainer::assemble(network, config))
    }

    fn assemble(network: TwoLayerNet, config: TrainConfig) -> Trainer {
        let interval = config.report_interval();
        Trainer {
            network,
            optimizer: Sgd::new(config.learnrate),
            monitor: LossMonitor::new(config.epochs, interval, config.progress_tx),
            epochs: config.epochs,
            epochs_run: 0,
        }
    }

    pub fn network(&self) -> &TwoLayerNet {
        &self.network
    }

    pub fn epochs_run(&self) -> usize {
        self.epochs_run
    }

    pub fn loss_history(&self) -> &[LossReport] {
        self.monitor.history()
    }

    /// Sum of every sample's gradient contribution under the current weights.
    pub fn epoch_gradients(&self, data: &Dataset<'_>) -> Result<Gradients> {
        let mut grads = Gradients::zeros_like(&self.network);
        for (x, target) in data.samples() {
            grads.accumulate_sample(&self.network, x, target)?;
        }
        Ok(grads)
    }

    /// One epoch: accumulate, apply one averaged update, and measure the
    /// loss when the reporting schedule says so.
    pub fn run_epoch(&mut self, data: &Dataset<'_>) -> Result<()> {
        let grads = self.epoch_gradients(data)?;
        self.optimizer.step(&mut self.network, &grads, data.len())?;

        let epoch = self.epochs_run;
        self.epochs_run += 1;

        if self.monitor.is_due(epoch) {
            let loss = MseLoss::over_dataset(&self.network, data)?;
            self.monitor.record(epoch, loss);
        }
        Ok(())
    }

    /// Runs the remaining configured epochs and returns the trained weights.
    pub fn fit(mut self, data: &Dataset<'_>) -> Result<TrainReport> {
        while self.epochs_run < self.epochs {
            self.run_epoch(data)?;
        }
        Ok(TrainReport {
            network: self.network,
            losses: self.monitor.into_history(),
        })
    }
}

/// Trains a fresh network on `features`/`targets`.
///
/// All shape and hyperparameter checks happen before the weights are drawn.
/// Use [`TwoLayerNet::into_parts`] on the result to get `(W1, W2)`.
#[instrument(skip_all, fields(n_records = features.len(), epochs = config.epochs))]
pub fn train(features: &[Vec<f64>], targets: &[f64], config: TrainConfig) -> Result<TwoLayerNet> {
    let data = Dataset::new(features, targets)?;
    let report = Trainer::new(&data, config)?.fit(&data)?;
    Ok(report.network)
}
