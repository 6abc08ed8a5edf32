pub mod mlp;
pub mod spec;

pub use mlp::MultiLayerPerceptron;
pub use spec::NetworkSpec;
