pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((expected - predicted)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| (e - p).powi(2))
            .sum::<f64>() / n
    }

    /// Raw per-output error: expected - predicted.
    ///
    /// This is the error, not the descent gradient: backpropagation here
    /// *adds* `learning_rate * error_term * input` to each weight, so the
    /// sign convention follows `target - output`.
    pub fn error(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| e - p)
            .collect()
    }
}
