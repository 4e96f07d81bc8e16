pub mod activation;
pub mod data;
pub mod error;
pub mod eval;
pub mod logging;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use data::Dataset;
pub use error::{Error, Result};
pub use eval::evaluate;
pub use math::matrix::Matrix;
pub use network::TwoLayerNet;
pub use train::{train, TrainConfig, Trainer};
