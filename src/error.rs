//! Error types for lattice construction and simulation setup.

use std::fmt;

/// Errors reported when a grid, simulation or curve is configured with invalid inputs.
///
/// These are returned before any work is done, so a failed call leaves nothing
/// half-built behind.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Lattice side length was zero.
    InvalidSize,

    /// Opening probability outside `[0, 1]` (or NaN).
    InvalidProbability(f64),

    /// An explicit site matrix did not have `side * side` entries.
    SiteCountMismatch { expected: usize, actual: usize },

    /// A simulation was asked to run zero trials.
    InvalidTrialCount,

    /// A curve was asked to aggregate into zero bins.
    InvalidBinCount,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSize => write!(f, "invalid grid size: side length must be at least 1"),
            ConfigError::InvalidProbability(p) => {
                write!(f, "invalid open probability {}: must lie in [0, 1]", p)
            }
            ConfigError::SiteCountMismatch { expected, actual } => {
                write!(
                    f,
                    "site matrix has {} entries, expected {}",
                    actual, expected
                )
            }
            ConfigError::InvalidTrialCount => write!(f, "trial count must be at least 1"),
            ConfigError::InvalidBinCount => write!(f, "bin count must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

pub(crate) fn check_probability(p: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(ConfigError::InvalidProbability(p))
    }
}
