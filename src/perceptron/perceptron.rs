use rand::Rng;

use crate::activation::sigmoid::sigmoid;
use crate::error::{MlpError, MlpResult};

/// A single sigmoid unit: one weight per input plus a trailing bias weight.
///
/// The bias value itself is a network-wide constant, so it is passed into
/// [`Perceptron::evaluate`] instead of being stored per unit; the unit only
/// owns the weight that multiplies it (the last slot of `weights`).
#[derive(Debug, Clone)]
pub struct Perceptron {
    weights: Vec<f64>,
}

impl Perceptron {
    /// Creates a unit consuming `inputs` upstream values, with `inputs + 1`
    /// weights drawn independently and uniformly from [-1, 1).
    pub fn new<R: Rng + ?Sized>(inputs: usize, rng: &mut R) -> Perceptron {
        let weights = (0..inputs + 1)
            .map(|_| rng.gen::<f64>() * 2.0 - 1.0)
            .collect();
        Perceptron { weights }
    }

    /// Number of upstream values this unit consumes (excludes the bias slot).
    pub fn input_len(&self) -> usize {
        self.weights.len() - 1
    }

    /// The weight vector; the last entry multiplies the bias constant.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Mutable view of the weight vector. A slice cannot be resized, so the
    /// `inputs + 1` length invariant holds no matter what gets written.
    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    /// Runs the unit: dot product of `inputs` extended by the bias constant
    /// against the weight vector, squashed through the sigmoid.
    ///
    /// The caller's slice is not touched; the bias term is folded in as
    /// `bias * weights[last]` rather than by building an extended vector.
    pub fn evaluate(&self, inputs: &[f64], bias: f64) -> MlpResult<f64> {
        if inputs.len() != self.input_len() {
            return Err(MlpError::DimensionMismatch {
                expected: self.input_len(),
                got: inputs.len(),
                context: "perceptron input".to_string(),
            });
        }
        let mut sum: f64 = inputs
            .iter()
            .zip(self.weights.iter())
            .map(|(x, w)| x * w)
            .sum();
        sum += bias * self.weights[self.weights.len() - 1];
        Ok(sigmoid(sum))
    }

    /// Overwrites the full weight vector (input weights plus bias weight).
    /// Rejects a wrong-length slice before writing anything.
    pub fn set_weights(&mut self, weights: &[f64]) -> MlpResult<()> {
        if weights.len() != self.weights.len() {
            return Err(MlpError::DimensionMismatch {
                expected: self.weights.len(),
                got: weights.len(),
                context: "perceptron weights".to_string(),
            });
        }
        self.weights.copy_from_slice(weights);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn allocates_one_weight_per_input_plus_bias() {
        let mut rng = StdRng::seed_from_u64(1);
        for inputs in [0, 1, 2, 7, 64] {
            let unit = Perceptron::new(inputs, &mut rng);
            assert_eq!(unit.weights().len(), inputs + 1);
            assert_eq!(unit.input_len(), inputs);
        }
    }

    #[test]
    fn initial_weights_lie_in_half_open_unit_band() {
        let mut rng = StdRng::seed_from_u64(2);
        let unit = Perceptron::new(1000, &mut rng);
        for &w in unit.weights() {
            assert!((-1.0..1.0).contains(&w), "weight {w} outside [-1, 1)");
        }
    }

    #[test]
    fn same_seed_yields_same_unit() {
        let a = Perceptron::new(5, &mut StdRng::seed_from_u64(42));
        let b = Perceptron::new(5, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.weights(), b.weights());
    }

    #[test]
    fn evaluate_matches_hand_computation() {
        let mut unit = Perceptron::new(2, &mut StdRng::seed_from_u64(3));
        unit.set_weights(&[0.5, -0.25, 1.0]).unwrap();
        // sum = 1.0*0.5 + 2.0*(-0.25) + bias(1.0)*1.0 = 1.0
        let out = unit.evaluate(&[1.0, 2.0], 1.0).unwrap();
        let expected = 1.0 / (1.0 + (-1.0f64).exp());
        assert!((out - expected).abs() < 1e-15);
    }

    #[test]
    fn evaluate_stays_strictly_between_zero_and_one() {
        // Weighted sums of ±30 sit deep in the sigmoid's tails while still
        // rounding to values strictly inside (0, 1).
        let mut unit = Perceptron::new(1, &mut StdRng::seed_from_u64(4));
        unit.set_weights(&[15.0, 15.0]).unwrap();
        let high = unit.evaluate(&[1.0], 1.0).unwrap();
        unit.set_weights(&[-15.0, -15.0]).unwrap();
        let low = unit.evaluate(&[1.0], 1.0).unwrap();
        assert!(high > 0.0 && high < 1.0);
        assert!(low > 0.0 && low < 1.0);
    }

    #[test]
    fn zero_input_unit_reduces_to_biased_sigmoid() {
        let mut unit = Perceptron::new(0, &mut StdRng::seed_from_u64(5));
        unit.set_weights(&[2.0]).unwrap();
        let out = unit.evaluate(&[], 1.0).unwrap();
        let expected = 1.0 / (1.0 + (-2.0f64).exp());
        assert!((out - expected).abs() < 1e-15);
    }

    #[test]
    fn evaluate_rejects_wrong_input_width() {
        let unit = Perceptron::new(3, &mut StdRng::seed_from_u64(6));
        let err = unit.evaluate(&[1.0, 2.0], 1.0).unwrap_err();
        assert_eq!(
            err,
            MlpError::DimensionMismatch {
                expected: 3,
                got: 2,
                context: "perceptron input".to_string(),
            }
        );
    }

    #[test]
    fn set_weights_rejects_wrong_length_and_leaves_weights_alone() {
        let mut unit = Perceptron::new(2, &mut StdRng::seed_from_u64(7));
        let before = unit.weights().to_vec();
        assert!(unit.set_weights(&[1.0, 2.0]).is_err());
        assert_eq!(unit.weights(), &before[..]);
    }
}
