use crate::data::Dataset;
use crate::error::Result;
use crate::network::TwoLayerNet;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }

    /// Mean squared error of `network` over every sample of `data`, using the
    /// network's current weights.
    pub fn over_dataset(network: &TwoLayerNet, data: &Dataset<'_>) -> Result<f64> {
        let predicted = data
            .samples()
            .map(|(x, _)| network.predict_proba(x))
            .collect::<Result<Vec<f64>>>()?;
        Ok(MseLoss::loss(&predicted, data.targets()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;

    #[test]
    fn loss_is_mean_of_squares() {
        assert_eq!(MseLoss::loss(&[0.5, 1.0], &[0.0, 0.0]), (0.25 + 1.0) / 2.0);
    }

    #[test]
    fn zero_network_has_quarter_loss_on_binary_targets() {
        let features = vec![vec![1.0, -2.0], vec![0.3, 0.3], vec![-4.0, 9.0]];
        let targets = vec![0.0, 1.0, 1.0];
        let data = Dataset::new(&features, &targets).unwrap();
        let net = TwoLayerNet::from_parts(Matrix::zeros(2, 3), vec![0.0; 3]).unwrap();
        assert_eq!(MseLoss::over_dataset(&net, &data).unwrap(), 0.25);
    }
}
