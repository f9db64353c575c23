//! End-to-end solver configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grasp::GraspConfig;
use crate::local_search::LocalSearchConfig;

/// Configuration for [`Solver::solve`](super::Solver::solve).
///
/// # Examples
///
/// ```
/// use u_workforce::grasp::GraspConfig;
/// use u_workforce::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_grasp(GraspConfig::randomized(0.9).with_seed(1))
///     .with_starts(4);
/// assert_eq!(config.starts, 4);
/// assert!(config.local_search.is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// Construction settings.
    pub grasp: GraspConfig,
    /// Number of independent constructions; the cheapest is improved.
    pub starts: usize,
    /// Local search settings, `None` to return the construction as is.
    pub local_search: Option<LocalSearchConfig>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            grasp: GraspConfig::default(),
            starts: 1,
            local_search: Some(LocalSearchConfig::default()),
        }
    }
}

impl SolverConfig {
    /// Sets the construction settings.
    pub fn with_grasp(mut self, grasp: GraspConfig) -> Self {
        self.grasp = grasp;
        self
    }

    /// Sets the number of construction starts.
    pub fn with_starts(mut self, starts: usize) -> Self {
        self.starts = starts;
        self
    }

    /// Sets the local search settings.
    pub fn with_local_search(mut self, config: LocalSearchConfig) -> Self {
        self.local_search = Some(config);
        self
    }

    /// Skips local search.
    pub fn without_local_search(mut self) -> Self {
        self.local_search = None;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.grasp.validate()?;
        if self.starts == 0 {
            return Err("starts must be at least 1".into());
        }
        if let Some(ls) = &self.local_search {
            ls.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.starts, 1);
        assert_eq!(config.local_search, Some(LocalSearchConfig::default()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_nested() {
        assert!(SolverConfig::default().with_starts(0).validate().is_err());
        assert!(SolverConfig::default()
            .with_grasp(GraspConfig::randomized(3.0))
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_local_search(LocalSearchConfig::default().with_time_limit_ms(0))
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .without_local_search()
            .validate()
            .is_ok());
    }
}
