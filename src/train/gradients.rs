use crate::activation::activation::sigmoid_prime;
use crate::error::Result;
use crate::math::matrix::{axpy, Matrix};
use crate::network::{ForwardPass, TwoLayerNet};

/// Gradient accumulators shaped like the network's weights.
///
/// Each entry points in the direction that *reduces* the squared error, so
/// the optimizer adds it to the weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub w1: Matrix,
    pub w2: Vec<f64>,
}

impl Gradients {
    pub fn zeros_like(network: &TwoLayerNet) -> Gradients {
        Gradients {
            w1: Matrix::zeros(network.n_features(), network.n_hidden()),
            w2: vec![0.0; network.n_hidden()],
        }
    }

    /// Contribution of a single `(x, target)` sample.
    pub fn for_sample(network: &TwoLayerNet, x: &[f64], target: f64) -> Result<Gradients> {
        let mut grads = Gradients::zeros_like(network);
        grads.accumulate_sample(network, x, target)?;
        Ok(grads)
    }

    /// Runs forward and backward for one sample and adds its contribution.
    pub fn accumulate_sample(&mut self, network: &TwoLayerNet, x: &[f64], target: f64) -> Result<()> {
        let pass = network.forward(x)?;
        let (output_delta, hidden_delta) = backward(network, &pass, target);

        axpy(&mut self.w2, &pass.hidden_act, output_delta)?;
        self.w1.add_outer(x, &hidden_delta)?;
        Ok(())
    }

    pub fn add(&mut self, other: &Gradients) -> Result<()> {
        self.w1.add_scaled(&other.w1, 1.0)?;
        axpy(&mut self.w2, &other.w2, 1.0)
    }
}

/// Chain rule through both sigmoids. Returns `(output_delta, hidden_delta)`.
///
/// Both derivatives are taken at the pre-activations recorded in `pass`.
fn backward(network: &TwoLayerNet, pass: &ForwardPass, target: f64) -> (f64, Vec<f64>) {
    let error = target - pass.pred;
    let output_delta = error * sigmoid_prime(pass.out);
    let hidden_delta = network
        .w2()
        .iter()
        .zip(&pass.hidden_pre)
        .map(|(w, &z)| output_delta * w * sigmoid_prime(z))
        .collect();
    (output_delta, hidden_delta)
}
