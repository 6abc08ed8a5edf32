pub mod activation;
pub mod error;
pub mod perceptron;
pub mod network;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use activation::sigmoid::{sigmoid, sigmoid_derivative};
pub use error::{MlpError, MlpResult};
pub use perceptron::perceptron::Perceptron;
pub use network::mlp::MultiLayerPerceptron;
pub use network::spec::NetworkSpec;
pub use loss::mse::MseLoss;
pub use train::trainer::train_network;
pub use train::loop_fn::train_loop;
pub use train::train_config::TrainConfig;
pub use train::epoch_stats::EpochStats;
