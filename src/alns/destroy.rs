//! Destroy operators.
//!
//! # Operators
//!
//! - [`RandomRemoval`]: Removes random stops
//! - [`WorstRemoval`]: Removes stops whose removal saves the most cost
//! - [`RelatedRemoval`]: Removes stops that are close in space and time
//!
//! # Reference
//!
//! Ropke, S. & Pisinger, D. (2006). "An Adaptive Large Neighborhood Search
//! Heuristic for the Pickup and Delivery Problem with Time Windows",
//! *Transportation Science* 40(4), 455-472.

use crate::models::{NormalizationStats, Solution};
use crate::random::RandomSource;

use super::operators::{biased_index, DestroyOperator, SearchContext};

/// Removes random stops from the solution.
///
/// Simple but effective baseline operator that ensures diversity in the
/// search process.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRemoval;

impl DestroyOperator for RandomRemoval {
    fn name(&self) -> &str {
        "random_removal"
    }

    fn destroy(
        &self,
        ctx: &SearchContext<'_>,
        mut solution: Solution,
        count: usize,
        rng: &mut dyn RandomSource,
    ) -> (Solution, Vec<usize>) {
        let mut served = solution.served_stops();
        let mut removed = Vec::with_capacity(count);
        while removed.len() < count && !served.is_empty() {
            let stop = served.swap_remove(rng.index(served.len()));
            solution.remove_stop(stop);
            removed.push(stop);
        }
        ctx.evaluator().evaluate(&mut solution);
        (solution, removed)
    }
}

/// Removes the stops whose removal lowers their route's cost the most.
///
/// Candidates are ranked by saving and drawn with a bias towards the top of
/// the ranking; `determinism` controls the bias (1 = uniform).
#[derive(Debug, Clone, Copy)]
pub struct WorstRemoval {
    determinism: f64,
}

impl Default for WorstRemoval {
    fn default() -> Self {
        Self { determinism: 3.0 }
    }
}

impl WorstRemoval {
    /// Creates a worst removal operator with the given ranking bias (`>= 1`).
    pub fn new(determinism: f64) -> Self {
        Self {
            determinism: determinism.max(1.0),
        }
    }
}

impl DestroyOperator for WorstRemoval {
    fn name(&self) -> &str {
        "worst_removal"
    }

    fn destroy(
        &self,
        ctx: &SearchContext<'_>,
        mut solution: Solution,
        count: usize,
        rng: &mut dyn RandomSource,
    ) -> (Solution, Vec<usize>) {
        let evaluator = ctx.evaluator();
        let mut removed = Vec::with_capacity(count);

        while removed.len() < count {
            let mut ranked: Vec<(usize, f64)> = Vec::new();
            for route in solution.active_routes() {
                let stops = route.stops();
                let cost = evaluator.route_cost(route);
                for i in 0..stops.len() {
                    let mut rest = stops.clone();
                    rest.remove(i);
                    let (shorter, _) = evaluator.build_route(route.vehicle(), &rest);
                    ranked.push((stops[i], cost - evaluator.route_cost(&shorter)));
                }
            }
            if ranked.is_empty() {
                break;
            }
            ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
            let (stop, _) = ranked[biased_index(rng, ranked.len(), self.determinism)];
            solution.remove_stop(stop);
            evaluator.evaluate(&mut solution);
            removed.push(stop);
        }

        evaluator.evaluate(&mut solution);
        (solution, removed)
    }
}

/// Removes stops related to a random seed stop (Shaw removal).
///
/// Relatedness of two stops is the sum of their travel time, the distance
/// between their earliest service starts and the dissimilarity of their
/// windows, each normalised by the problem's maximum (lower = more related).
///
/// # Reference
///
/// Shaw, P. (1998). "Using Constraint Programming and Local Search Methods
/// to Solve Vehicle Routing Problems", *CP-98*, LNCS 1520, 417-431.
#[derive(Debug, Clone, Copy)]
pub struct RelatedRemoval {
    determinism: f64,
}

impl Default for RelatedRemoval {
    fn default() -> Self {
        Self { determinism: 6.0 }
    }
}

impl RelatedRemoval {
    /// Creates a related removal operator with the given ranking bias (`>= 1`).
    pub fn new(determinism: f64) -> Self {
        Self {
            determinism: determinism.max(1.0),
        }
    }

    /// Relatedness score of two stops; lower is more related.
    pub fn relatedness(ctx: &SearchContext<'_>, a: usize, b: usize) -> f64 {
        let p = ctx.problem();
        let stats = p.stats();
        NormalizationStats::normalize(p.stop_travel_time(a, b), stats.max_travel_time())
            + NormalizationStats::normalize(
                p.service_time_start_distance(a, b),
                stats.max_service_start_distance,
            )
            + NormalizationStats::normalize(
                p.time_window_dissimilarity(a, b),
                stats.max_time_window_distance,
            )
    }
}

impl DestroyOperator for RelatedRemoval {
    fn name(&self) -> &str {
        "related_removal"
    }

    fn destroy(
        &self,
        ctx: &SearchContext<'_>,
        mut solution: Solution,
        count: usize,
        rng: &mut dyn RandomSource,
    ) -> (Solution, Vec<usize>) {
        let mut served = solution.served_stops();
        let mut removed = Vec::with_capacity(count);
        if served.is_empty() || count == 0 {
            return (solution, removed);
        }

        removed.push(served.swap_remove(rng.index(served.len())));
        while removed.len() < count && !served.is_empty() {
            let anchor = removed[rng.index(removed.len())];
            served.sort_by(|&a, &b| {
                Self::relatedness(ctx, anchor, a).total_cmp(&Self::relatedness(ctx, anchor, b))
            });
            removed.push(served.remove(biased_index(rng, served.len(), self.determinism)));
        }

        for &stop in &removed {
            solution.remove_stop(stop);
        }
        ctx.evaluator().evaluate(&mut solution);
        (solution, removed)
    }
}
