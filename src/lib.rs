//! # u-techroute
//!
//! Technician routing with time windows, multiple depots, skill
//! requirements, a shared lunch break and overtime, optimized with Adaptive
//! Large Neighborhood Search.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Depot, Vehicle, ServiceStop, Route, Solution, Problem)
//! - [`distance`]: Travel distance and travel time matrices
//! - [`instance`]: CSV/JSON instance ingestion
//! - [`evaluation`]: Route timing, feasibility checking and cost evaluation
//! - [`construction`]: Window dissimilarity and initial solutions
//! - [`alns`]: Acceptance criteria, destroy/repair operators and the search loop
//! - [`random`]: Seeded random source shared by the whole search
//! - [`error`]: Error type

pub mod alns;
pub mod construction;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod instance;
pub mod models;
pub mod random;
