//! Adaptive operator weights.
//!
//! Each operator carries a weight; operators are drawn by roulette wheel and
//! the weight of the operator used in an iteration moves towards the reward
//! its outcome earned:
//!
//! ```text
//! w = w * (1 - rho) + rho * reward,   w >= min_weight
//! ```
//!
//! # Reference
//!
//! Ropke & Pisinger (2006), Section 3.4

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// How an iteration's candidate compared to the search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Accepted and strictly better than the best so far.
    NewBest,
    /// Accepted and strictly better than the current solution.
    Improved,
    /// Accepted but not better than the current solution.
    Accepted,
    /// Not accepted.
    Rejected,
}

/// Reward per [`Outcome`] tier.
///
/// Defaults are the sigma values from Ropke & Pisinger (2006).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    /// Reward for a new global best (sigma_1).
    pub new_best: f64,
    /// Reward for improving the current solution (sigma_2).
    pub improved: f64,
    /// Reward for accepting a non-improving solution (sigma_3).
    pub accepted: f64,
    /// Reward for a rejected candidate.
    pub rejected: f64,
}

impl Default for Scores {
    fn default() -> Self {
        Self {
            new_best: 33.0,
            improved: 9.0,
            accepted: 3.0,
            rejected: 0.0,
        }
    }
}

impl Scores {
    /// The reward for `outcome`.
    pub fn reward(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::NewBest => self.new_best,
            Outcome::Improved => self.improved,
            Outcome::Accepted => self.accepted,
            Outcome::Rejected => self.rejected,
        }
    }
}

/// Roulette-wheel weights over a fixed list of operators.
///
/// # Examples
///
/// ```
/// use u_techroute::alns::OperatorWeights;
///
/// let mut w = OperatorWeights::new(2);
/// w.update(0, 33.0, 0.1, 0.01);
/// assert!((w.weights()[0] - 4.2).abs() < 1e-12);
/// assert_eq!(w.weights()[1], 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorWeights {
    weights: Vec<f64>,
}

impl OperatorWeights {
    /// `n` operators, all starting at weight 1.
    pub fn new(n: usize) -> Self {
        Self {
            weights: vec![1.0; n],
        }
    }

    /// Current weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of operators.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if there are no operators.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Selection probability of every operator.
    pub fn probabilities(&self) -> Vec<f64> {
        let total: f64 = self.weights.iter().sum();
        if total <= 0.0 {
            let n = self.weights.len() as f64;
            return self.weights.iter().map(|_| 1.0 / n).collect();
        }
        self.weights.iter().map(|w| w / total).collect()
    }

    /// Draws an operator index with probability proportional to its weight.
    ///
    /// Falls back to a uniform draw when every weight is zero.
    pub fn select(&self, rng: &mut dyn RandomSource) -> usize {
        let total: f64 = self.weights.iter().sum();
        if total <= 0.0 {
            return rng.index(self.weights.len());
        }

        let mut roll = rng.uniform() * total;
        for (i, w) in self.weights.iter().enumerate() {
            roll -= w;
            if roll < 0.0 {
                return i;
            }
        }
        self.weights.len() - 1
    }

    /// Moves the weight of `index` towards `reward` by `reaction` and floors
    /// it at `min_weight`.
    pub fn update(&mut self, index: usize, reward: f64, reaction: f64, min_weight: f64) {
        let w = &mut self.weights[index];
        *w = (*w * (1.0 - reaction) + reaction * reward).max(min_weight);
    }
}
