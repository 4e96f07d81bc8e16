pub mod evaluator;

pub use evaluator::{evaluate, predict, predict_proba};
