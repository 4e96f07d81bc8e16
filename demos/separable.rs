// Trains on a synthetic linearly separable set and reports test accuracy.
// An optional first argument names a JSON file of hyperparameters:
//   cargo run --example separable -- config.json
use std::error::Error;

use ferrite_ff::data::{linearly_separable, split_at_fraction};
use ferrite_ff::{evaluate, logging, train, TrainConfig};

fn main() -> Result<(), Box<dyn Error>> {
    logging::install_logger()?;

    let config = match std::env::args().nth(1) {
        Some(path) => TrainConfig::load_json(&path)?,
        None => TrainConfig::default(),
    };

    let (features, targets) = linearly_separable(400, config.seed);
    let (x_train, x_test) = split_at_fraction(&features, 0.9)?;
    let (y_train, y_test) = split_at_fraction(&targets, 0.9)?;

    let network = train(x_train, y_train, config)?;
    let accuracy = evaluate(x_test, y_test, &network)?;
    println!("Prediction accuracy: {accuracy:.3}");
    Ok(())
}
