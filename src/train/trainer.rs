use crate::error::{MlpError, MlpResult};
use crate::network::mlp::MultiLayerPerceptron;

/// Runs one full pass over the dataset, backpropagating each example in
/// order, and returns the mean of the per-example squared errors.
///
/// The dataset must be non-empty and `inputs`/`targets` must pair up one to
/// one; width mismatches inside an example surface as the underlying
/// network's `DimensionMismatch`. A failed example aborts the pass, but every
/// example before it has already been applied.
pub fn train_network(
    network: &mut MultiLayerPerceptron,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
) -> MlpResult<f64> {
    if inputs.is_empty() {
        return Err(MlpError::InvalidConfiguration {
            reason: "training dataset is empty".to_string(),
        });
    }
    if inputs.len() != targets.len() {
        return Err(MlpError::DimensionMismatch {
            expected: inputs.len(),
            got: targets.len(),
            context: "training targets".to_string(),
        });
    }

    let mut total_loss = 0.0;
    for (input, target) in inputs.iter().zip(targets.iter()) {
        total_loss += network.train(input, target)?;
    }
    Ok(total_loss / inputs.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xor_dataset() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let inputs = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ];
        let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
        (inputs, targets)
    }

    #[test]
    fn one_pass_returns_the_mean_example_loss() {
        let mut net = MultiLayerPerceptron::from_seed(&[2, 2, 1], 1.0, 0.0, 3).unwrap();
        let (inputs, targets) = xor_dataset();

        // With a zero learning rate the pass is read-only, so the mean must
        // equal the per-example losses recomputed afterwards.
        let mean = train_network(&mut net, &inputs, &targets).unwrap();
        let mut expected = 0.0;
        for (input, target) in inputs.iter().zip(targets.iter()) {
            let out = net.forward(input).unwrap()[0];
            expected += (target[0] - out) * (target[0] - out);
        }
        expected /= inputs.len() as f64;
        assert!((mean - expected).abs() < 1e-12);
    }

    #[test]
    fn passes_over_a_dataset_reduce_the_mean_loss() {
        let mut net = MultiLayerPerceptron::from_seed(&[2, 4, 1], 1.0, 0.5, 5).unwrap();
        let (inputs, targets) = xor_dataset();

        let first = train_network(&mut net, &inputs, &targets).unwrap();
        let mut last = first;
        for _ in 0..499 {
            last = train_network(&mut net, &inputs, &targets).unwrap();
        }
        assert!(last < first, "mean loss did not improve: {first} -> {last}");
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let mut net = MultiLayerPerceptron::from_seed(&[2, 1], 1.0, 0.5, 6).unwrap();
        assert!(matches!(
            train_network(&mut net, &[], &[]),
            Err(MlpError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn mismatched_example_counts_are_rejected() {
        let mut net = MultiLayerPerceptron::from_seed(&[2, 1], 1.0, 0.5, 7).unwrap();
        let inputs = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        let targets = vec![vec![0.0]];
        assert!(matches!(
            train_network(&mut net, &inputs, &targets),
            Err(MlpError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn example_width_errors_propagate_out() {
        let mut net = MultiLayerPerceptron::from_seed(&[2, 1], 1.0, 0.5, 8).unwrap();
        let inputs = vec![vec![0.0, 0.0, 0.0]];
        let targets = vec![vec![0.0]];
        assert!(matches!(
            train_network(&mut net, &inputs, &targets),
            Err(MlpError::DimensionMismatch { .. })
        ));
    }
}
