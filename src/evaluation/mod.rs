//! Route timing, feasibility checks and the objective.

mod evaluator;

pub use evaluator::{CostModel, RouteEvaluator};
