use serde::{Deserialize, Serialize};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `max_epochs`: upper bound on full passes over the training data
/// - `target_mse`: optional early-stop threshold; the loop ends once an
///   epoch's mean MSE drops below it
/// - `log_every`: print one progress line every this many epochs; `0`
///   keeps the loop silent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub max_epochs: usize,
    pub target_mse: Option<f64>,
    pub log_every: usize,
}

impl TrainConfig {
    /// Creates a minimal config: run exactly `max_epochs` epochs, silently.
    pub fn new(max_epochs: usize) -> TrainConfig {
        TrainConfig {
            max_epochs,
            target_mse: None,
            log_every: 0,
        }
    }

    /// Stops the loop early once an epoch's mean MSE falls below `target`.
    pub fn with_target_mse(mut self, target: f64) -> TrainConfig {
        self.target_mse = Some(target);
        self
    }

    /// Prints a progress line every `every` epochs.
    pub fn with_log_every(mut self, every: usize) -> TrainConfig {
        self.log_every = every;
        self
    }
}
