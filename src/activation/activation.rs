use std::f64::consts::E;

/// Logistic function `1 / (1 + e^-x)`.
///
/// For very negative `x` the exponential overflows to infinity and the result
/// is exactly `0.0`, which is still a valid probability.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of [`sigmoid`] with respect to its *pre-activation* input:
/// `σ(z) · (1 − σ(z))`.
///
/// Callers must pass the same `z` the forward pass fed into `sigmoid`, never
/// the activation `σ(z)` itself.
pub fn sigmoid_prime(z: f64) -> f64 {
    let fz = sigmoid(z);
    fz * (1.0 - fz)
}
