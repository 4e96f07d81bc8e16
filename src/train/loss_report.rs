use serde::{Deserialize, Serialize};
use std::fmt;

/// One periodic measurement of the training loss.
///
/// `Display` renders the progress line, e.g. `Train loss: 0.2412` or
/// `Train loss: 0.2419  WARNING - Loss Increasing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossReport {
    /// 0-based epoch after whose update the loss was measured.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean squared error over the whole training set.
    pub train_loss: f64,
    /// Set when the loss exceeds the previous report's.
    pub increasing: bool,
}

impl fmt::Display for LossReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Train loss: {}", self.train_loss)?;
        if self.increasing {
            write!(f, "  WARNING - Loss Increasing")?;
        }
        Ok(())
    }
}
