use serde::{Deserialize, Serialize};

use crate::error::MlpResult;
use crate::network::mlp::MultiLayerPerceptron;

/// A fully serializable description of a network layout plus its training
/// hyperparameters.
///
/// `NetworkSpec` can be saved to / loaded from JSON independently of any
/// live network, making it possible to store configurations before training
/// starts and rebuild the same architecture later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name used as the config file stem.
    pub name: String,
    /// Ordered layer widths, input layer first.
    pub layer_sizes: Vec<usize>,
    /// The constant multiplied into every unit's bias weight.
    pub bias: f64,
    /// Step size for backpropagation's weight updates.
    pub learning_rate: f64,
}

impl NetworkSpec {
    pub fn new(name: &str, layer_sizes: &[usize], bias: f64, learning_rate: f64) -> NetworkSpec {
        NetworkSpec {
            name: name.to_string(),
            layer_sizes: layer_sizes.to_vec(),
            bias,
            learning_rate,
        }
    }

    /// Instantiates the described network with random initial weights.
    pub fn build(&self) -> MlpResult<MultiLayerPerceptron> {
        MultiLayerPerceptron::new(&self.layer_sizes, self.bias, self.learning_rate)
    }

    /// Instantiates the described network with a deterministic initialization.
    pub fn build_seeded(&self, seed: u64) -> MlpResult<MultiLayerPerceptron> {
        MultiLayerPerceptron::from_seed(&self.layer_sizes, self.bias, self.learning_rate, seed)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
