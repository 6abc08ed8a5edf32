use std::fmt;

/// Result type alias for network operations.
pub type MlpResult<T> = Result<T, MlpError>;

/// Errors reported by network construction, inference and training.
///
/// Every operation either fully succeeds or fails with one of these before
/// mutating any state; there are no partial-failure or retry semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum MlpError {
    /// A supplied sequence length does not match the network's configured
    /// shape (wrong input width, target width, or weight-vector length).
    DimensionMismatch {
        expected: usize,
        got: usize,
        context: String,
    },

    /// The requested layer layout or training setup is unusable (fewer than
    /// two layers, a zero-width layer, an empty training set).
    InvalidConfiguration { reason: String },
}

impl fmt::Display for MlpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlpError::DimensionMismatch {
                expected,
                got,
                context,
            } => write!(
                f,
                "Dimension mismatch in {}: expected {}, got {}",
                context, expected, got
            ),
            MlpError::InvalidConfiguration { reason } => {
                write!(f, "Invalid configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for MlpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_sequence() {
        let err = MlpError::DimensionMismatch {
            expected: 2,
            got: 3,
            context: "input vector".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("input vector"));
        assert!(msg.contains("expected 2"));
        assert!(msg.contains("got 3"));
    }

    #[test]
    fn display_reports_configuration_reason() {
        let err = MlpError::InvalidConfiguration {
            reason: "network needs at least 2 layers".to_string(),
        };
        assert!(err.to_string().contains("at least 2 layers"));
    }
}
