use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activation::sigmoid::sigmoid_derivative;
use crate::error::{MlpError, MlpResult};
use crate::loss::mse::MseLoss;
use crate::perceptron::perceptron::Perceptron;

/// A fully-connected feed-forward network of sigmoid [`Perceptron`]s.
///
/// Layer 0 is the input buffer and holds no units; every later layer holds
/// one unit per neuron, each wired to the whole previous layer. Activation
/// and error-term buffers are allocated once at construction and reused by
/// every `forward`/`train` call, so the slice returned by [`forward`] is a
/// view into the network's own state.
///
/// The layer layout, the bias constant and the learning rate are fixed for
/// the lifetime of the network; only the weights change.
///
/// [`forward`]: MultiLayerPerceptron::forward
#[derive(Debug, Clone)]
pub struct MultiLayerPerceptron {
    layer_sizes: Vec<usize>,
    units: Vec<Vec<Perceptron>>,
    activations: Vec<Vec<f64>>,
    error_terms: Vec<Vec<f64>>,
    learning_rate: f64,
    bias: f64,
}

impl MultiLayerPerceptron {
    /// Builds a network with weights drawn from the thread-local generator.
    ///
    /// `layer_sizes[0]` is the input width, the last entry the output width.
    /// Fails with `InvalidConfiguration` if fewer than two layers are given
    /// or any layer is empty.
    pub fn new(layer_sizes: &[usize], bias: f64, learning_rate: f64) -> MlpResult<Self> {
        Self::with_rng(layer_sizes, bias, learning_rate, &mut rand::thread_rng())
    }

    /// Builds a network with a deterministic weight initialization.
    pub fn from_seed(
        layer_sizes: &[usize],
        bias: f64,
        learning_rate: f64,
        seed: u64,
    ) -> MlpResult<Self> {
        Self::with_rng(
            layer_sizes,
            bias,
            learning_rate,
            &mut StdRng::seed_from_u64(seed),
        )
    }

    /// Builds a network drawing initial weights from a caller-owned generator.
    pub fn with_rng<R: Rng + ?Sized>(
        layer_sizes: &[usize],
        bias: f64,
        learning_rate: f64,
        rng: &mut R,
    ) -> MlpResult<Self> {
        if layer_sizes.len() < 2 {
            return Err(MlpError::InvalidConfiguration {
                reason: format!(
                    "network needs at least 2 layers (input and output), got {}",
                    layer_sizes.len()
                ),
            });
        }
        if let Some(i) = layer_sizes.iter().position(|&size| size == 0) {
            return Err(MlpError::InvalidConfiguration {
                reason: format!("layer {} has zero units", i),
            });
        }

        let mut units = Vec::with_capacity(layer_sizes.len());
        let mut activations = Vec::with_capacity(layer_sizes.len());
        let mut error_terms = Vec::with_capacity(layer_sizes.len());
        for (i, &size) in layer_sizes.iter().enumerate() {
            activations.push(vec![0.0; size]);
            error_terms.push(vec![0.0; size]);
            // Layer 0 is the input buffer, so it has no units.
            let layer_units = if i == 0 {
                Vec::new()
            } else {
                (0..size)
                    .map(|_| Perceptron::new(layer_sizes[i - 1], rng))
                    .collect()
            };
            units.push(layer_units);
        }

        Ok(MultiLayerPerceptron {
            layer_sizes: layer_sizes.to_vec(),
            units,
            activations,
            error_terms,
            learning_rate,
            bias,
        })
    }

    /// The configured layer widths, input layer first.
    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    /// Width of the input layer.
    pub fn input_len(&self) -> usize {
        self.layer_sizes[0]
    }

    /// Width of the output layer.
    pub fn output_len(&self) -> usize {
        self.layer_sizes[self.layer_sizes.len() - 1]
    }

    /// The shared bias constant fed to every unit.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// The step size used by `train`'s weight updates.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Forward pass: stores `input` as layer 0's activation, evaluates every
    /// layer in order, and returns the output layer's activation buffer.
    ///
    /// The returned slice borrows the network's reused output buffer; the
    /// borrow checker stops it from outliving the next `forward`/`train`.
    pub fn forward(&mut self, input: &[f64]) -> MlpResult<&[f64]> {
        if input.len() != self.layer_sizes[0] {
            return Err(MlpError::DimensionMismatch {
                expected: self.layer_sizes[0],
                got: input.len(),
                context: "input vector".to_string(),
            });
        }
        self.activations[0].copy_from_slice(input);
        for i in 1..self.layer_sizes.len() {
            let (upstream, current) = io_buffers(&mut self.activations, i);
            for (j, unit) in self.units[i].iter().enumerate() {
                current[j] = unit.evaluate(upstream, self.bias)?;
            }
        }
        let last = self.activations.len() - 1;
        Ok(&self.activations[last])
    }

    /// Runs one backpropagation step for a single `(input, target)` example
    /// and returns the example's mean squared error (computed before any
    /// weight moves).
    ///
    /// Order of operations: forward pass; output error terms; hidden error
    /// terms from the layer below the output down to layer 1; then additive
    /// weight updates for every layer. All deltas use the activations cached
    /// by the forward pass, so no update ever sees a half-updated network.
    pub fn train(&mut self, input: &[f64], target: &[f64]) -> MlpResult<f64> {
        let last = self.layer_sizes.len() - 1;
        if target.len() != self.layer_sizes[last] {
            return Err(MlpError::DimensionMismatch {
                expected: self.layer_sizes[last],
                got: target.len(),
                context: "target vector".to_string(),
            });
        }

        // Validates the input width before touching any buffer.
        self.forward(input)?;

        let errors = MseLoss::error(&self.activations[last], target);
        let mse = MseLoss::loss(&self.activations[last], target);

        // Output-layer error terms: σ'(out) · raw error.
        for k in 0..self.layer_sizes[last] {
            self.error_terms[last][k] =
                sigmoid_derivative(self.activations[last][k]) * errors[k];
        }

        // Hidden-layer error terms, output side first: each unit collects the
        // error terms of the layer above it, weighted by the connections
        // leading there, then scales by its own activation derivative.
        for i in (1..last).rev() {
            let (current, downstream) = self.error_terms.split_at_mut(i + 1);
            for h in 0..self.layer_sizes[i] {
                let mut forward_error = 0.0;
                for (k, unit) in self.units[i + 1].iter().enumerate() {
                    forward_error += unit.weights()[h] * downstream[0][k];
                }
                current[i][h] =
                    sigmoid_derivative(self.activations[i][h]) * forward_error;
            }
        }

        // Weight updates, input side first. The bias weight sits one past the
        // upstream activations and is driven by the bias constant instead.
        for i in 1..=last {
            let upstream_width = self.layer_sizes[i - 1];
            for j in 0..self.layer_sizes[i] {
                let step = self.learning_rate * self.error_terms[i][j];
                let weights = self.units[i][j].weights_mut();
                for k in 0..upstream_width {
                    weights[k] += step * self.activations[i - 1][k];
                }
                weights[upstream_width] += step * self.bias;
            }
        }

        Ok(mse)
    }

    /// Bulk-overwrites every unit's weights. `weights[0]` configures layer 1
    /// (the first non-input layer), matching the shape [`weights`] returns.
    ///
    /// The whole nested shape is validated before anything is written, so a
    /// mismatch anywhere leaves the network untouched.
    ///
    /// [`weights`]: MultiLayerPerceptron::weights
    pub fn set_weights(&mut self, weights: &[Vec<Vec<f64>>]) -> MlpResult<()> {
        let non_input_layers = self.layer_sizes.len() - 1;
        if weights.len() != non_input_layers {
            return Err(MlpError::DimensionMismatch {
                expected: non_input_layers,
                got: weights.len(),
                context: "weight layers".to_string(),
            });
        }
        for (i, layer_weights) in weights.iter().enumerate() {
            let layer = i + 1;
            if layer_weights.len() != self.layer_sizes[layer] {
                return Err(MlpError::DimensionMismatch {
                    expected: self.layer_sizes[layer],
                    got: layer_weights.len(),
                    context: format!("units of layer {}", layer),
                });
            }
            for (j, unit_weights) in layer_weights.iter().enumerate() {
                if unit_weights.len() != self.layer_sizes[layer - 1] + 1 {
                    return Err(MlpError::DimensionMismatch {
                        expected: self.layer_sizes[layer - 1] + 1,
                        got: unit_weights.len(),
                        context: format!("weights of layer {} unit {}", layer, j),
                    });
                }
            }
        }

        for (i, layer_weights) in weights.iter().enumerate() {
            for (j, unit_weights) in layer_weights.iter().enumerate() {
                self.units[i + 1][j].set_weights(unit_weights)?;
            }
        }
        Ok(())
    }

    /// Copies out every unit's weights, nested as `[layer][unit][weight]`
    /// with layer 1 first, the shape `set_weights` accepts.
    pub fn weights(&self) -> Vec<Vec<Vec<f64>>> {
        self.units[1..]
            .iter()
            .map(|layer| layer.iter().map(|unit| unit.weights().to_vec()).collect())
            .collect()
    }
}

impl fmt::Display for MultiLayerPerceptron {
    /// Weight dump: one line per non-input-layer unit, labeled by layer and
    /// unit index. A debugging aid, not a stable machine format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.units.iter().enumerate().skip(1) {
            for (j, unit) in layer.iter().enumerate() {
                write!(f, "Layer {} Unit {}:", i, j)?;
                for w in unit.weights() {
                    write!(f, " {}", w)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Splits the activation buffers around `layer`, yielding the upstream
/// layer's values (read) and `layer`'s own buffer (written) without copying.
fn io_buffers(buffers: &mut [Vec<f64>], layer: usize) -> (&[f64], &mut [f64]) {
    let (before, after) = buffers.split_at_mut(layer);
    (&before[layer - 1], &mut after[0])
}
