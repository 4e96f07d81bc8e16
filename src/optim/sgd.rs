use crate::error::{Error, Result};
use crate::math::matrix::axpy;
use crate::network::TwoLayerNet;
use crate::train::gradients::Gradients;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies the averaged update `W += lr * grad / n_records` to both
    /// weight sets. Fails if any weight becomes non-finite.
    pub fn step(&self, network: &mut TwoLayerNet, grads: &Gradients, n_records: usize) -> Result<()> {
        let scale = self.learning_rate / n_records as f64;
        let (w1, w2) = network.weights_mut();
        w1.add_scaled(&grads.w1, scale)?;
        axpy(w2, &grads.w2, scale)?;

        if !network.is_finite() {
            return Err(Error::NumericOverflow { stage: "weight update" });
        }
        Ok(())
    }
}
