//! Destroy/repair contracts and the context they run in.

use crate::evaluation::RouteEvaluator;
use crate::models::{Problem, Solution};
use crate::random::RandomSource;

/// Read-only data shared by all operators during a run.
#[derive(Debug, Clone, Copy)]
pub struct SearchContext<'a> {
    evaluator: RouteEvaluator<'a>,
}

impl<'a> SearchContext<'a> {
    /// Wraps an evaluator (which carries the problem).
    pub fn new(evaluator: RouteEvaluator<'a>) -> Self {
        Self { evaluator }
    }

    /// The problem being solved.
    pub fn problem(&self) -> &'a Problem {
        self.evaluator.problem()
    }

    /// The route evaluator.
    pub fn evaluator(&self) -> &RouteEvaluator<'a> {
        &self.evaluator
    }
}

/// Removes stops from a solution.
///
/// # References
///
/// Ropke & Pisinger (2006), Section 2
pub trait DestroyOperator {
    /// Returns a human-readable name for this operator.
    fn name(&self) -> &str;

    /// Removes up to `count` served stops.
    ///
    /// Returns the partial solution (evaluated) and the removed stops. The
    /// removed stops are not put on the solution's unassigned list.
    fn destroy(
        &self,
        ctx: &SearchContext<'_>,
        solution: Solution,
        count: usize,
        rng: &mut dyn RandomSource,
    ) -> (Solution, Vec<usize>);
}

/// Reinserts stops into a partial solution.
///
/// # References
///
/// Ropke & Pisinger (2006), Section 2
pub trait RepairOperator {
    /// Returns a human-readable name for this operator.
    fn name(&self) -> &str;

    /// Places every stop in `removed`, and every stop already on the
    /// unassigned list, at a feasible position. Stops without one end up
    /// unassigned. Returns the evaluated solution.
    fn repair(
        &self,
        ctx: &SearchContext<'_>,
        solution: Solution,
        removed: Vec<usize>,
        rng: &mut dyn RandomSource,
    ) -> Solution;
}

/// Draws an index in `0..len` biased towards the front.
///
/// `determinism` of 1 is uniform; larger values favour low indices.
pub(crate) fn biased_index(rng: &mut dyn RandomSource, len: usize, determinism: f64) -> usize {
    let y = rng.uniform();
    ((y.powf(determinism) * len as f64) as usize).min(len - 1)
}
