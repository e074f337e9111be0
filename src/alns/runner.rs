//! ALNS execution loop.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::evaluation::RouteEvaluator;
use crate::models::Solution;
use crate::random::{RandomSource, SeededRandom};

use super::acceptance::AcceptanceCriterion;
use super::config::AlnsConfig;
use super::operators::{DestroyOperator, RepairOperator, SearchContext};
use super::weights::{OperatorWeights, Outcome};

/// Result of an ALNS optimization run.
#[derive(Debug, Clone, Serialize)]
pub struct AlnsResult {
    /// The best solution found (evaluated, every route feasible).
    pub best: Solution,

    /// Total number of iterations.
    pub iterations: usize,

    /// Number of new best solutions found.
    pub improvements: usize,

    /// Final destroy operator weights.
    pub destroy_weights: Vec<f64>,

    /// Final repair operator weights.
    pub repair_weights: Vec<f64>,

    /// `(iteration, objective)` at the start and at every new best.
    pub best_history: Vec<(usize, f64)>,

    /// Wall-clock time spent in the loop.
    pub elapsed: Duration,
}

impl AlnsResult {
    /// Objective of the best solution.
    pub fn best_cost(&self) -> f64 {
        self.best.objective()
    }
}

/// Executes the ALNS algorithm.
pub struct AlnsRunner;

impl AlnsRunner {
    /// Runs ALNS optimization from `initial`.
    ///
    /// Each iteration clones the current solution, removes stops with a
    /// destroy operator, reinserts them with a repair operator, ejects
    /// anything left infeasible, asks `criterion` whether to move, and
    /// rewards both operators by outcome. The loop ends when the iteration
    /// or time budget in `config` is spent; the budget is checked between
    /// iterations only.
    ///
    /// The initial solution is evaluated and made feasible first, so the
    /// returned best is never worse than it.
    ///
    /// # Arguments
    /// * `evaluator` - Evaluator carrying the problem and cost model
    /// * `initial` - Starting solution (e.g. all stops unassigned)
    /// * `destroy_ops` - Destroy operators to choose from
    /// * `repair_ops` - Repair operators to choose from
    /// * `criterion` - Acceptance criterion, advanced once per iteration
    /// * `config` - Algorithm configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` is invalid or an operator
    /// list is empty.
    pub fn run<C: AcceptanceCriterion>(
        evaluator: &RouteEvaluator<'_>,
        initial: Solution,
        destroy_ops: &[Box<dyn DestroyOperator>],
        repair_ops: &[Box<dyn RepairOperator>],
        criterion: &mut C,
        config: &AlnsConfig,
    ) -> Result<AlnsResult> {
        config.validate()?;
        if destroy_ops.is_empty() {
            return Err(Error::config(
                "destroy_ops",
                "at least one destroy operator is required",
            ));
        }
        if repair_ops.is_empty() {
            return Err(Error::config(
                "repair_ops",
                "at least one repair operator is required",
            ));
        }

        let mut rng = match config.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };
        let ctx = SearchContext::new(*evaluator);
        let (min_removal, max_removal) = config.removal_bounds(evaluator.problem().num_stops());

        let mut current = initial;
        evaluator.restore_feasibility(&mut current);
        let mut best = current.clone();

        let mut destroy_weights = OperatorWeights::new(destroy_ops.len());
        let mut repair_weights = OperatorWeights::new(repair_ops.len());
        let mut improvements = 0usize;
        let mut best_history = vec![(0, best.objective())];

        tracing::info!(
            stops = evaluator.problem().num_stops(),
            vehicles = evaluator.problem().fleet().len(),
            max_iterations = config.max_iterations,
            initial = best.objective(),
            "alns started"
        );

        let start = Instant::now();
        let mut iteration = 0usize;
        loop {
            if config.max_iterations > 0 && iteration >= config.max_iterations {
                break;
            }
            if config.time_limit.is_some_and(|limit| start.elapsed() >= limit) {
                break;
            }

            let d_idx = destroy_weights.select(&mut rng);
            let r_idx = repair_weights.select(&mut rng);
            let count = min_removal + rng.index(max_removal - min_removal + 1);

            let (partial, removed) =
                destroy_ops[d_idx].destroy(&ctx, current.clone(), count, &mut rng);
            let mut candidate = repair_ops[r_idx].repair(&ctx, partial, removed, &mut rng);
            evaluator.restore_feasibility(&mut candidate);

            let cost = candidate.objective();
            let accepted = criterion.accept(&mut rng, &best, &current, &candidate);
            let outcome = if !accepted {
                Outcome::Rejected
            } else if cost < best.objective() {
                Outcome::NewBest
            } else if cost < current.objective() {
                Outcome::Improved
            } else {
                Outcome::Accepted
            };

            iteration += 1;
            if accepted {
                if outcome == Outcome::NewBest {
                    best = candidate.clone();
                    improvements += 1;
                    best_history.push((iteration, cost));
                    tracing::debug!(
                        iteration,
                        cost,
                        unassigned = best.num_unassigned(),
                        "new best solution"
                    );
                }
                current = candidate;
            }

            let reward = config.scores.reward(outcome);
            destroy_weights.update(d_idx, reward, config.reaction_factor, config.min_weight);
            repair_weights.update(r_idx, reward, config.reaction_factor, config.min_weight);

            tracing::trace!(
                iteration,
                destroy = destroy_ops[d_idx].name(),
                repair = repair_ops[r_idx].name(),
                removed = count,
                cost,
                ?outcome,
                "iteration done"
            );
        }

        let elapsed = start.elapsed();
        tracing::info!(
            iterations = iteration,
            improvements,
            best = best.objective(),
            unassigned = best.num_unassigned(),
            elapsed_ms = elapsed.as_millis() as u64,
            "alns finished"
        );

        Ok(AlnsResult {
            best,
            iterations: iteration,
            improvements,
            destroy_weights: destroy_weights.weights().to_vec(),
            repair_weights: repair_weights.weights().to_vec(),
            best_history,
            elapsed,
        })
    }
}
