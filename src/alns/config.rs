//! ALNS configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::weights::Scores;

/// Configuration for the search loop.
///
/// # Scoring
///
/// After each iteration the destroy and repair operators that were used are
/// rewarded by outcome tier (see [`Scores`]), and their weights move towards
/// the reward by `reaction_factor` (rho).
///
/// # Removal count
///
/// Each iteration removes between `min_removal` and
/// `max(min_removal, floor(max_removal_fraction * stops))` stops, drawn
/// uniformly.
///
/// # Budget
///
/// The loop stops after `max_iterations` or once `time_limit` has elapsed,
/// whichever comes first. The budget is checked between iterations only.
///
/// # References
///
/// Ropke & Pisinger (2006), Section 3
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_techroute::alns::AlnsConfig;
///
/// let config = AlnsConfig::default()
///     .with_max_iterations(5_000)
///     .with_time_limit(Duration::from_secs(30))
///     .with_removal(2, 0.3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlnsConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,

    /// Wall-clock budget, if any.
    pub time_limit: Option<Duration>,

    /// Rewards per outcome tier.
    pub scores: Scores,

    /// Reaction factor (rho) for weight updates, in (0, 1].
    ///
    /// Ropke & Pisinger suggest 0.1.
    pub reaction_factor: f64,

    /// Minimum operator weight (prevents operators from becoming unused).
    pub min_weight: f64,

    /// Fewest stops removed per iteration.
    pub min_removal: usize,

    /// Upper bound on the removed share of all stops, in (0, 1].
    pub max_removal_fraction: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AlnsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            time_limit: None,
            scores: Scores::default(),
            reaction_factor: 0.1,
            min_weight: 0.01,
            min_removal: 1,
            max_removal_fraction: 0.4,
            seed: None,
        }
    }
}

impl AlnsConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_scores(mut self, scores: Scores) -> Self {
        self.scores = scores;
        self
    }

    pub fn with_reaction_factor(mut self, rho: f64) -> Self {
        self.reaction_factor = rho;
        self
    }

    pub fn with_min_weight(mut self, min_weight: f64) -> Self {
        self.min_weight = min_weight;
        self
    }

    pub fn with_removal(mut self, min: usize, max_fraction: f64) -> Self {
        self.min_removal = min;
        self.max_removal_fraction = max_fraction;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of stops to remove is drawn from `min..=max` of this range.
    pub(crate) fn removal_bounds(&self, num_stops: usize) -> (usize, usize) {
        let max = (self.max_removal_fraction * num_stops as f64).floor() as usize;
        (self.min_removal, max.max(self.min_removal))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 && self.time_limit.is_none() {
            return Err(Error::config(
                "max_iterations",
                "must be positive when no time limit is set",
            ));
        }
        if !(self.reaction_factor > 0.0 && self.reaction_factor <= 1.0) {
            return Err(Error::config(
                "reaction_factor",
                format!("must be in (0, 1], got {}", self.reaction_factor),
            ));
        }
        if !(self.min_weight >= 0.0) {
            return Err(Error::config(
                "min_weight",
                format!("must be non-negative, got {}", self.min_weight),
            ));
        }
        let s = &self.scores;
        if [s.new_best, s.improved, s.accepted, s.rejected]
            .iter()
            .any(|v| !(*v >= 0.0))
        {
            return Err(Error::config("scores", "rewards must be non-negative"));
        }
        if self.min_removal == 0 {
            return Err(Error::config("min_removal", "must be at least 1"));
        }
        if !(self.max_removal_fraction > 0.0 && self.max_removal_fraction <= 1.0) {
            return Err(Error::config(
                "max_removal_fraction",
                format!("must be in (0, 1], got {}", self.max_removal_fraction),
            ));
        }
        Ok(())
    }
}
