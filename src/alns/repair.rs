//! Repair operators.
//!
//! # Operators
//!
//! - [`GreedyInsertion`]: Inserts the stop with the cheapest insertion first
//! - [`RegretInsertion`]: Inserts the stop with the highest regret first
//!
//! Both only consider vehicles skilled for the stop and only positions that
//! keep the route feasible. Stops without such a position stay unassigned.
//!
//! # Reference
//!
//! Ropke, S. & Pisinger, D. (2006). "An Adaptive Large Neighborhood Search
//! Heuristic for the Pickup and Delivery Problem with Time Windows",
//! *Transportation Science* 40(4), 455-472.

use crate::models::Solution;
use crate::random::RandomSource;

use super::operators::{RepairOperator, SearchContext};

/// Best feasible insertion per eligible vehicle, sorted by cost ascending.
///
/// Returns `(vehicle, position, cost increase)` triples.
fn insertion_options(ctx: &SearchContext<'_>, solution: &Solution, stop: usize) -> Vec<(usize, usize, f64)> {
    let evaluator = ctx.evaluator();
    let mut options: Vec<(usize, usize, f64)> = ctx
        .problem()
        .service_map()
        .vehicles_for(stop)
        .iter()
        .filter_map(|&v| {
            evaluator
                .best_insertion(solution, v, stop)
                .map(|(pos, cost)| (v, pos, cost))
        })
        .collect();
    options.sort_by(|a, b| a.2.total_cmp(&b.2));
    options
}

/// Collects the stops to place: the removed ones and any left unassigned.
fn collect_pending(solution: &mut Solution, removed: Vec<usize>) -> Vec<usize> {
    let mut pending = removed;
    pending.extend(solution.take_unassigned());
    pending
}

/// Greedy insertion: repeatedly inserts the pending stop with the cheapest
/// feasible insertion at that position.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyInsertion;

impl RepairOperator for GreedyInsertion {
    fn name(&self) -> &str {
        "greedy_insertion"
    }

    fn repair(
        &self,
        ctx: &SearchContext<'_>,
        mut solution: Solution,
        removed: Vec<usize>,
        _rng: &mut dyn RandomSource,
    ) -> Solution {
        let evaluator = ctx.evaluator();
        let mut pending = collect_pending(&mut solution, removed);

        while !pending.is_empty() {
            let mut best: Option<(usize, usize, usize, f64)> = None;
            for (pi, &stop) in pending.iter().enumerate() {
                if let Some(&(v, pos, cost)) = insertion_options(ctx, &solution, stop).first() {
                    if best.is_none_or(|b| cost < b.3) {
                        best = Some((pi, v, pos, cost));
                    }
                }
            }

            let Some((pi, v, pos, _)) = best else { break };
            let stop = pending.swap_remove(pi);
            evaluator.insert(&mut solution, v, stop, pos);
        }

        for stop in pending {
            solution.add_unassigned(stop);
        }
        evaluator.evaluate(&mut solution);
        solution
    }
}

/// Regret-k insertion: prioritizes stops with the highest regret value.
///
/// Regret-k is the sum of differences between the best insertion cost and the
/// next `k - 1` best costs in other vehicles. Stops with fewer than `k`
/// feasible vehicles are inserted first, since their options are scarce.
///
/// Uses k=2 (regret-2) by default.
#[derive(Debug, Clone, Copy)]
pub struct RegretInsertion {
    k: usize,
}

impl Default for RegretInsertion {
    fn default() -> Self {
        Self { k: 2 }
    }
}

impl RegretInsertion {
    /// Creates a regret-2 insertion operator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a regret insertion operator with custom k.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k.max(2);
        self
    }
}

impl RepairOperator for RegretInsertion {
    fn name(&self) -> &str {
        "regret_insertion"
    }

    fn repair(
        &self,
        ctx: &SearchContext<'_>,
        mut solution: Solution,
        removed: Vec<usize>,
        _rng: &mut dyn RandomSource,
    ) -> Solution {
        let evaluator = ctx.evaluator();
        let mut pending = collect_pending(&mut solution, removed);

        while !pending.is_empty() {
            // (pending index, vehicle, position, regret, best cost)
            let mut best: Option<(usize, usize, usize, f64, f64)> = None;
            for (pi, &stop) in pending.iter().enumerate() {
                let options = insertion_options(ctx, &solution, stop);
                let Some(&(v, pos, cost)) = options.first() else {
                    continue;
                };
                let regret = if options.len() < self.k {
                    f64::INFINITY
                } else {
                    options
                        .iter()
                        .skip(1)
                        .take(self.k - 1)
                        .map(|o| o.2 - cost)
                        .sum()
                };
                let better = best.is_none_or(|b| regret > b.3 || (regret == b.3 && cost < b.4));
                if better {
                    best = Some((pi, v, pos, regret, cost));
                }
            }

            let Some((pi, v, pos, _, _)) = best else { break };
            let stop = pending.swap_remove(pi);
            evaluator.insert(&mut solution, v, stop, pos);
        }

        for stop in pending {
            solution.add_unassigned(stop);
        }
        evaluator.evaluate(&mut solution);
        solution
    }
}
