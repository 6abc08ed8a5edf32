use std::f64::consts::E;

/// Logistic sigmoid: 1 / (1 + e^(-x)). Output is strictly inside (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid expressed in terms of its output:
/// σ'(z) = σ(z)·(1 - σ(z)), so the caller passes `activated` = σ(z).
///
/// Backpropagation only ever has the activated value on hand (the cached
/// layer output), which is why this takes σ(z) rather than z.
pub fn sigmoid_derivative(activated: f64) -> f64 {
    activated * (1.0 - activated)
}
