//! Local search configuration.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`LocalSearchRunner`](super::LocalSearchRunner).
///
/// # Examples
///
/// ```
/// use u_workforce::local_search::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default().with_time_limit_ms(2_000);
/// assert_eq!(config.time_limit_ms, 2_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalSearchConfig {
    /// Wall-clock budget in milliseconds.
    ///
    /// Checked before every pass and before every selection scanned; when
    /// exceeded, the current solution is returned as is.
    pub time_limit_ms: u64,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 5 * 60 * 1000,
        }
    }
}

impl LocalSearchConfig {
    /// Sets the wall-clock budget in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Budget as a [`Duration`].
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_limit_ms == 0 {
            return Err("time_limit_ms must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget_is_five_minutes() {
        let config = LocalSearchConfig::default();
        assert_eq!(config.time_limit(), Duration::from_secs(300));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_budget_rejected() {
        assert!(LocalSearchConfig::default()
            .with_time_limit_ms(0)
            .validate()
            .is_err());
    }
}
