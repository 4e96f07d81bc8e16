use tracing::debug;

use crate::data::Dataset;
use crate::error::{ensure_len, Result};
use crate::network::TwoLayerNet;

/// Positive-class probabilities for every row, in order.
///
/// Each row goes through [`TwoLayerNet::predict_proba`], so evaluation and
/// training share one forward pass. The rows are borrowed, never copied.
pub fn predict_proba(network: &TwoLayerNet, features: &[Vec<f64>]) -> Result<Vec<f64>> {
    features
        .iter()
        .map(|x| {
            ensure_len("test features per row vs W1 rows", network.n_features(), x.len())?;
            network.predict_proba(x)
        })
        .collect()
}

/// Hard 0/1 labels: positive exactly when the probability exceeds 0.5.
pub fn predict(network: &TwoLayerNet, features: &[Vec<f64>]) -> Result<Vec<f64>> {
    Ok(predict_proba(network, features)?
        .into_iter()
        .map(|p| if p > 0.5 { 1.0 } else { 0.0 })
        .collect())
}

/// Fraction of test samples whose thresholded prediction equals the label.
///
/// Pure: neither the network nor the data are modified.
pub fn evaluate(features: &[Vec<f64>], targets: &[f64], network: &TwoLayerNet) -> Result<f64> {
    let data = Dataset::new(features, targets)?;
    ensure_len("test features per row vs W1 rows", network.n_features(), data.n_features())?;

    let predictions = predict(network, data.features())?;
    let correct = predictions
        .iter()
        .zip(data.targets())
        .filter(|(p, y)| p == y)
        .count();
    let accuracy = correct as f64 / data.len() as f64;
    debug!(correct, total = data.len(), accuracy, "evaluated");
    Ok(accuracy)
}
