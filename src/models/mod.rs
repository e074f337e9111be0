//! Domain model for technician routing.
//!
//! Depots, vehicles with skills and overtime rules, service stops with time
//! windows, the shared lunch break, and the derived lookup data (service map
//! and normalization statistics) bundled into an immutable [`Problem`].
//! [`Route`] and [`Solution`] hold the mutable search state.

mod depot;
mod problem;
mod route;
mod skills;
mod solution;
mod statistics;
mod stop;
mod time;
mod vehicle;

pub use depot::Depot;
pub use problem::{Node, NodeKind, Problem};
pub use route::{Route, Visit};
pub use skills::{ServiceMap, SkillSet};
pub use solution::{CostBreakdown, Objective, Solution, Violation, ViolationType};
pub use statistics::{NormalizationStats, DEFAULT_AVG_DRIVING_COST};
pub use stop::ServiceStop;
pub use time::{LunchBreak, PlanningHorizon, TimeInterval, DAY_END};
pub use vehicle::Vehicle;
