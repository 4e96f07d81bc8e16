pub mod network;

pub use network::{ForwardPass, TwoLayerNet};
