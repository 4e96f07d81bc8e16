use rand::Rng;

use crate::activation::activation::sigmoid;
use crate::error::{ensure_len, Error, Result};
use crate::math::matrix::{dot, Matrix};

/// One sigmoid hidden layer feeding a single sigmoid output unit, no biases.
///
/// `w1` is `n_features × n_hidden`, `w2` has length `n_hidden`. Both shapes
/// are fixed at construction; only the optimizer changes the values.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoLayerNet {
    w1: Matrix,
    w2: Vec<f64>,
}

/// Intermediate values of one forward pass, kept for backprop.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
    /// `x · W1`
    pub hidden_pre: Vec<f64>,
    /// `σ(hidden_pre)`
    pub hidden_act: Vec<f64>,
    /// `hidden_act · W2`
    pub out: f64,
    /// `σ(out)`
    pub pred: f64,
}

impl TwoLayerNet {
    /// Random initialization: every weight drawn from N(0, 1/sqrt(n_features)).
    ///
    /// Small initial pre-activations keep the sigmoid units near their linear
    /// region on the first step.
    pub fn init<R: Rng + ?Sized>(n_features: usize, n_hidden: usize, rng: &mut R) -> TwoLayerNet {
        let std_dev = 1.0 / (n_features as f64).sqrt();
        let w1 = Matrix::random_normal(n_features, n_hidden, std_dev, rng);
        let w2 = Matrix::random_normal_vec(n_hidden, std_dev, rng);
        TwoLayerNet { w1, w2 }
    }

    pub fn zeros(n_features: usize, n_hidden: usize) -> TwoLayerNet {
        TwoLayerNet {
            w1: Matrix::zeros(n_features, n_hidden),
            w2: vec![0.0; n_hidden],
        }
    }

    /// Wraps caller-supplied weights after checking `w2.len() == w1.cols`.
    pub fn from_parts(w1: Matrix, w2: Vec<f64>) -> Result<TwoLayerNet> {
        if w1.rows == 0 || w1.cols == 0 {
            return Err(Error::EmptyDataset("hidden weight matrix has no entries"));
        }
        ensure_len("output weights per hidden unit", w1.cols, w2.len())?;
        Ok(TwoLayerNet { w1, w2 })
    }

    pub fn into_parts(self) -> (Matrix, Vec<f64>) {
        (self.w1, self.w2)
    }

    pub fn w1(&self) -> &Matrix {
        &self.w1
    }

    pub fn w2(&self) -> &[f64] {
        &self.w2
    }

    pub fn n_features(&self) -> usize {
        self.w1.rows
    }

    pub fn n_hidden(&self) -> usize {
        self.w1.cols
    }

    pub(crate) fn weights_mut(&mut self) -> (&mut Matrix, &mut Vec<f64>) {
        (&mut self.w1, &mut self.w2)
    }

    pub fn is_finite(&self) -> bool {
        self.w1.is_finite() && self.w2.iter().all(|w| w.is_finite())
    }

    /// Forward pass for a single sample.
    pub fn forward(&self, x: &[f64]) -> Result<ForwardPass> {
        let hidden_pre = self.w1.row_mul(x)?;
        if !hidden_pre.iter().all(|z| z.is_finite()) {
            return Err(Error::NumericOverflow { stage: "hidden pre-activation" });
        }
        let hidden_act: Vec<f64> = hidden_pre.iter().map(|&z| sigmoid(z)).collect();

        let out = dot(&hidden_act, &self.w2)?;
        if !out.is_finite() {
            return Err(Error::NumericOverflow { stage: "output pre-activation" });
        }

        Ok(ForwardPass {
            hidden_pre,
            hidden_act,
            out,
            pred: sigmoid(out),
        })
    }

    /// Predicted probability of the positive class for one sample.
    pub fn predict_proba(&self, x: &[f64]) -> Result<f64> {
        Ok(self.forward(x)?.pred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn init_has_expected_shapes_and_is_seeded() {
        let a = TwoLayerNet::init(6, 4, &mut StdRng::seed_from_u64(21));
        let b = TwoLayerNet::init(6, 4, &mut StdRng::seed_from_u64(21));
        let c = TwoLayerNet::init(6, 4, &mut StdRng::seed_from_u64(22));
        assert_eq!(a.w1().shape(), (6, 4));
        assert_eq!(a.w2().len(), 4);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn zero_weights_predict_one_half() {
        let net = TwoLayerNet::zeros(3, 2);
        let pass = net.forward(&[10.0, -3.0, 0.25]).unwrap();
        assert_eq!(pass.hidden_pre, vec![0.0, 0.0]);
        assert_eq!(pass.hidden_act, vec![0.5, 0.5]);
        assert_eq!(pass.out, 0.0);
        assert_eq!(pass.pred, 0.5);
    }

    #[test]
    fn forward_follows_the_layer_equations() {
        let w1 = Matrix::from_rows(vec![vec![1.0, -1.0], vec![0.5, 2.0]]).unwrap();
        let net = TwoLayerNet::from_parts(w1, vec![0.3, -0.7]).unwrap();
        let pass = net.forward(&[2.0, 1.0]).unwrap();

        assert_eq!(pass.hidden_pre, vec![2.5, 0.0]);
        let h = [sigmoid(2.5), 0.5];
        assert_eq!(pass.hidden_act, h.to_vec());
        assert_eq!(pass.out, 0.3 * h[0] - 0.7 * h[1]);
        assert_eq!(pass.pred, sigmoid(pass.out));
    }

    #[test]
    fn wrong_input_width_is_a_shape_mismatch() {
        let net = TwoLayerNet::zeros(3, 2);
        assert!(matches!(
            net.forward(&[1.0, 2.0]),
            Err(Error::ShapeMismatch { expected: 3, got: 2, .. })
        ));
        assert!(TwoLayerNet::from_parts(Matrix::zeros(3, 2), vec![0.0; 3]).is_err());
    }

    #[test]
    fn overflowing_pre_activation_is_reported() {
        let w1 = Matrix::from_rows(vec![vec![f64::MAX, 1.0]]).unwrap();
        let net = TwoLayerNet::from_parts(w1, vec![1.0, 1.0]).unwrap();
        assert!(matches!(
            net.forward(&[10.0]),
            Err(Error::NumericOverflow { stage: "hidden pre-activation" })
        ));
    }
}
