use serde::{Deserialize, Serialize};

/// Statistics for one completed epoch.
///
/// `train_loop` returns the stats of its last completed epoch, which is
/// enough to tell whether a run converged or merely ran out of budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Mean squared error over all samples in this epoch.
    pub mse: f64,
    /// Wall-clock time of the run when this epoch finished, in milliseconds.
    pub elapsed_ms: u64,
}
