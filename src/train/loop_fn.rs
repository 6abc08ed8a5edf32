use std::time::Instant;

use crate::error::{MlpError, MlpResult};
use crate::network::mlp::MultiLayerPerceptron;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_network;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for up to `config.max_epochs` full passes over the data
/// and returns the stats of the **last completed epoch**.
///
/// # Arguments
/// - `network`: mutable reference to the network; modified in place
/// - `inputs`: training samples, each of the network's input width
/// - `targets`: corresponding targets, same length as `inputs`
/// - `config`: epoch budget, optional early-stop threshold, log cadence
///
/// # Early termination
/// When `config.target_mse` is set, the loop ends as soon as an epoch's mean
/// MSE drops below it; otherwise the full epoch budget is spent.
pub fn train_loop(
    network: &mut MultiLayerPerceptron,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
) -> MlpResult<EpochStats> {
    if config.max_epochs == 0 {
        return Err(MlpError::InvalidConfiguration {
            reason: "max_epochs must be at least 1".to_string(),
        });
    }

    let started = Instant::now();
    let mut stats = EpochStats {
        epoch: 0,
        mse: f64::INFINITY,
        elapsed_ms: 0,
    };

    for epoch in 1..=config.max_epochs {
        let mse = train_network(network, inputs, targets)?;
        stats = EpochStats {
            epoch,
            mse,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };

        if config.log_every > 0 && epoch % config.log_every == 0 {
            println!("Epoch {epoch}: loss = {mse:.6}");
        }

        if let Some(target_mse) = config.target_mse {
            if mse < target_mse {
                break;
            }
        }
    }

    Ok(stats)
}
