//! Construction collaborators: window dissimilarity and initial solutions.
//!
//! - [`WindowDissimilarity`]: pluggable time-window distance, with
//!   [`SymmetricDifference`] as the default
//! - [`sequential_insertion`]: time-window-aware nearest neighbor per vehicle
//! - [`unassigned_solution`]: every vehicle idle, every stop unassigned

mod dissimilarity;
mod sequential;

pub use dissimilarity::{SymmetricDifference, WindowDissimilarity};
pub use sequential::{sequential_insertion, unassigned_solution};
