use std::sync::mpsc;
use tracing::{info, warn};

use crate::train::loss_report::LossReport;

/// Periodic training-loss check with an advisory divergence warning.
///
/// Nothing here can fail a run: an increasing loss is logged at WARN level
/// and recorded, and a closed progress channel is ignored.
#[derive(Debug)]
pub struct LossMonitor {
    interval: usize,
    total_epochs: usize,
    last_loss: Option<f64>,
    history: Vec<LossReport>,
    progress_tx: Option<mpsc::Sender<LossReport>>,
}

impl LossMonitor {
    pub fn new(
        total_epochs: usize,
        interval: usize,
        progress_tx: Option<mpsc::Sender<LossReport>>,
    ) -> LossMonitor {
        LossMonitor {
            interval: interval.max(1),
            total_epochs,
            last_loss: None,
            history: Vec::new(),
            progress_tx,
        }
    }

    /// Whether the loss should be measured after `epoch` (0-based).
    pub fn is_due(&self, epoch: usize) -> bool {
        epoch % self.interval == 0
    }

    pub fn record(&mut self, epoch: usize, train_loss: f64) -> &LossReport {
        let increasing = self.last_loss.is_some_and(|last| train_loss > last);
        let report = LossReport {
            epoch,
            total_epochs: self.total_epochs,
            train_loss,
            increasing,
        };

        if increasing {
            warn!("{report}");
        } else {
            info!("{report}");
        }

        if let Some(tx) = &self.progress_tx {
            // A gone receiver only means nobody is listening any more.
            let _ = tx.send(report.clone());
        }

        self.last_loss = Some(train_loss);
        self.history.push(report);
        &self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[LossReport] {
        &self.history
    }

    pub fn into_history(self) -> Vec<LossReport> {
        self.history
    }
}
