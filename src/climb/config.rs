//! Random-restart hill climbing configuration.

use crate::error::{Error, Result};

/// Configuration parameters for random-restart hill climbing.
///
/// # Examples
///
/// ```
/// use u_tsp_climb::climb::ClimbConfig;
///
/// let config = ClimbConfig::default()
///     .with_max_restarts(40)
///     .with_seed(7);
/// assert_eq!(config.max_restarts, 40);
/// assert_eq!(config.seed, Some(7));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimbConfig {
    /// Number of independent hill-climbing runs per batch.
    pub max_restarts: usize,
    /// Random seed. `Some` makes every batch replay the same restarts;
    /// `None` draws a fresh seed per batch.
    pub seed: Option<u64>,
}

impl Default for ClimbConfig {
    fn default() -> Self {
        Self {
            max_restarts: 100,
            seed: None,
        }
    }
}

impl ClimbConfig {
    /// Sets the number of restarts per batch.
    pub fn with_max_restarts(mut self, n: usize) -> Self {
        self.max_restarts = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_restarts == 0 {
            return Err(Error::invalid_config("max_restarts must be at least 1"));
        }
        Ok(())
    }
}
