//! ALNS (Adaptive Large Neighborhood Search) for technician routing.
//!
//! - [`acceptance`]: Record-to-Record Travel and Simulated Annealing
//! - [`destroy`]: Destroy operators (random, worst, related)
//! - [`repair`]: Repair operators (greedy insertion, regret insertion)
//! - [`OperatorWeights`]: Roulette-wheel selection with adaptive weights
//! - [`AlnsRunner`]: The search loop
//!
//! # Examples
//!
//! ```no_run
//! use u_techroute::alns::*;
//! use u_techroute::construction::unassigned_solution;
//! use u_techroute::evaluation::{CostModel, RouteEvaluator};
//! use u_techroute::instance::{Instance, InstanceFormat};
//! use u_techroute::models::Problem;
//!
//! # fn main() -> u_techroute::error::Result<()> {
//! let instance = Instance::from_paths("instance.csv", "matrices.json", InstanceFormat::default())?;
//! let problem = Problem::new(instance)?;
//! let evaluator = RouteEvaluator::new(&problem, CostModel::default());
//!
//! let destroy: Vec<Box<dyn DestroyOperator>> = vec![
//!     Box::new(RandomRemoval),
//!     Box::new(WorstRemoval::default()),
//!     Box::new(RelatedRemoval::default()),
//! ];
//! let repair: Vec<Box<dyn RepairOperator>> =
//!     vec![Box::new(GreedyInsertion), Box::new(RegretInsertion::new())];
//! let mut criterion = RecordToRecordTravel::new(10.0, 0.0, 0.01, UpdateMethod::Linear)?;
//!
//! let result = AlnsRunner::run(
//!     &evaluator,
//!     unassigned_solution(&evaluator),
//!     &destroy,
//!     &repair,
//!     &mut criterion,
//!     &AlnsConfig::default().with_max_iterations(2_000).with_seed(42),
//! )?;
//! println!("{} ({} unassigned)", result.best_cost(), result.best.num_unassigned());
//! # Ok(())
//! # }
//! ```

pub mod acceptance;
mod config;
pub mod destroy;
#[cfg(test)]
mod fixtures;
mod operators;
pub mod repair;
mod runner;
mod weights;

pub use acceptance::{
    update, AcceptanceCriterion, Criterion, CriterionConfig, RecordToRecordTravel,
    SimulatedAnnealing, UpdateMethod,
};
pub use config::AlnsConfig;
pub use destroy::{RandomRemoval, RelatedRemoval, WorstRemoval};
pub use operators::{DestroyOperator, RepairOperator, SearchContext};
pub use repair::{GreedyInsertion, RegretInsertion};
pub use runner::{AlnsResult, AlnsRunner};
pub use weights::{OperatorWeights, Outcome, Scores};
