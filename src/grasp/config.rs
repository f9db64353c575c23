//! Construction configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the next provider is chosen among the feasible candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Always the lowest score; ties go to the earlier provider.
    #[default]
    Greedy,

    /// Uniform choice among the restricted candidate list.
    ///
    /// The list holds every candidate whose score is within
    /// `alpha * (worst - best)` of the best score. `alpha = 0` behaves like
    /// [`Strategy::Greedy`], `alpha = 1` picks uniformly among all
    /// feasible candidates.
    Randomized {
        /// Greediness factor in `[0, 1]`.
        alpha: f64,
    },
}

/// Configuration for [`GraspRunner`](super::GraspRunner).
///
/// # Examples
///
/// ```
/// use u_workforce::grasp::{GraspConfig, Strategy};
///
/// let config = GraspConfig::default()
///     .with_alpha(0.3)
///     .with_seed(7);
/// assert_eq!(config.strategy, Strategy::Randomized { alpha: 0.3 });
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraspConfig {
    /// Candidate selection rule.
    pub strategy: Strategy,

    /// Random seed for the randomized strategy.
    ///
    /// `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Greedy,
            seed: None,
        }
    }
}

impl GraspConfig {
    /// Deterministic greedy construction.
    pub fn greedy() -> Self {
        Self::default()
    }

    /// Randomized construction with the given greediness factor.
    pub fn randomized(alpha: f64) -> Self {
        Self::default().with_alpha(alpha)
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Switches to the randomized strategy with the given `alpha`.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.strategy = Strategy::Randomized { alpha };
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if let Strategy::Randomized { alpha } = self.strategy {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(format!("alpha must be within [0, 1], got {alpha}"));
            }
        }
        Ok(())
    }
}
